/// Which side of the object a channel sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Inlet,
    Outlet,
}

// Inherited from the two-operand adder this object grew out of; kept as-is
// because patches already display it.
const OUTLET_TEXT: &str = "Sum of Left and Right Inlets";

/// Hover text for an inlet or outlet. Inlets without a description return `None`.
pub fn assist(kind: ChannelKind, index: usize) -> Option<String> {
    match kind {
        ChannelKind::Outlet => Some(OUTLET_TEXT.to_string()),
        ChannelKind::Inlet => match index {
            0 => Some(format!("Inlet {}: Left Operand (Causes Output)", index)),
            1 => Some(format!("Inlet {}: Right Operand (Added to Left)", index)),
            _ => None,
        },
    }
}
