use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every message a supersawer instance responds to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Message {
    /// Emit the current spread to the outlets.
    Bang,
    /// Float in the left inlet: base frequency.
    Float(f64),
    /// Int in the left inlet: base frequency, stored as a float.
    Int(i64),
    /// Int in the middle inlet: active voice count.
    Voices(i64),
    /// Float in the right inlet: detune ratio.
    Detune(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum MessageError {
    #[error("empty message")]
    Empty,
    #[error("unknown selector '{0}'")]
    UnknownSelector(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("'{selector}' could not parse '{value}' as a number")]
    InvalidNumber {
        selector: &'static str,
        value: String,
    },
    #[error("'{0}' given too many arguments")]
    TrailingArguments(&'static str),
}

impl Message {
    /// Selector name as the host spells it.
    pub fn selector(&self) -> &'static str {
        match self {
            Message::Bang => "bang",
            Message::Float(_) => "float",
            Message::Int(_) => "int",
            Message::Voices(_) => "in1",
            Message::Detune(_) => "ft2",
        }
    }

    /// Inlet the message arrives on.
    pub fn inlet(&self) -> usize {
        match self {
            Message::Bang | Message::Float(_) | Message::Int(_) => 0,
            Message::Voices(_) => 1,
            Message::Detune(_) => 2,
        }
    }

    pub fn parse(text: &str) -> Result<Self, MessageError> {
        let mut atoms = text.split_whitespace();
        let head = atoms.next().ok_or(MessageError::Empty)?;

        // A bare number goes to the left inlet
        if let Ok(n) = head.parse::<i64>() {
            return finish(Message::Int(n), "int", atoms);
        }
        if let Ok(x) = head.parse::<f64>() {
            return finish(Message::Float(x), "float", atoms);
        }

        let message = match head {
            "bang" => Message::Bang,
            "float" => Message::Float(number(atoms.next(), "float")?),
            "int" => Message::Int(integer(atoms.next(), "int")?),
            "in1" => Message::Voices(integer(atoms.next(), "in1")?),
            "ft2" => Message::Detune(number(atoms.next(), "ft2")?),
            other => return Err(MessageError::UnknownSelector(other.to_string())),
        };
        finish(message, message.selector(), atoms)
    }
}

fn finish<'a>(
    message: Message,
    selector: &'static str,
    mut rest: impl Iterator<Item = &'a str>,
) -> Result<Message, MessageError> {
    match rest.next() {
        Some(_) => Err(MessageError::TrailingArguments(selector)),
        None => Ok(message),
    }
}

fn number(atom: Option<&str>, selector: &'static str) -> Result<f64, MessageError> {
    let atom = atom.ok_or(MessageError::MissingArgument(selector))?;
    atom.parse().map_err(|_| MessageError::InvalidNumber {
        selector,
        value: atom.to_string(),
    })
}

// The host truncates floats arriving at an int inlet
fn integer(atom: Option<&str>, selector: &'static str) -> Result<i64, MessageError> {
    let atom = atom.ok_or(MessageError::MissingArgument(selector))?;
    if let Ok(n) = atom.parse::<i64>() {
        return Ok(n);
    }
    match atom.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x.trunc() as i64),
        _ => Err(MessageError::InvalidNumber {
            selector,
            value: atom.to_string(),
        }),
    }
}

impl FromStr for Message {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Bang => write!(f, "bang"),
            Message::Float(x) | Message::Detune(x) => write!(f, "{} {:?}", self.selector(), x),
            Message::Int(n) | Message::Voices(n) => write!(f, "{} {}", self.selector(), n),
        }
    }
}
