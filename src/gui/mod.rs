use crate::host::{ObjectClass, SupersawerInstance};
use crate::supersaw::{assist, ChannelKind, Message};
use eframe::egui;
use std::collections::VecDeque;

const HISTORY_LEN: usize = 32;

/// A one-object patch: number boxes feed the inlets, a bang button triggers output,
/// and every outlet is shown with its hover text.
pub struct PatchApp {
    class: ObjectClass,
    instance: SupersawerInstance,
    creation_arg: i64,
    message_line: String,
    message_error: Option<String>,
    bang_on_change: bool,
    history: VecDeque<String>,
}

impl PatchApp {
    pub fn new(class: ObjectClass, creation_arg: Option<i64>) -> Self {
        let instance = class.instantiate(creation_arg);
        Self {
            creation_arg: instance.calculator().max_voices() as i64,
            class,
            instance,
            message_line: String::new(),
            message_error: None,
            bang_on_change: false,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    fn send(&mut self, message: Message) {
        self.instance.dispatch(message);
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(message.to_string());

        if self.bang_on_change && message != Message::Bang {
            self.send(Message::Bang);
        }
    }

    fn recreate(&mut self) {
        log::info!("recreating object with argument {}", self.creation_arg);
        self.instance = self.class.instantiate(Some(self.creation_arg));
        self.history.clear();
    }

    fn inlets_ui(&mut self, ui: &mut egui::Ui) {
        let calculator = self.instance.calculator();
        let mut frequency = calculator.base_frequency();
        let mut voices = calculator.active_voices();
        let mut detune = calculator.detune_ratio();

        ui.horizontal(|ui| {
            let response = ui
                .add(egui::DragValue::new(&mut frequency).speed(1.0).suffix(" Hz"))
                .on_hover_text(inlet_text(0));
            if response.changed() {
                self.send(Message::Float(frequency));
            }

            let response = ui
                .add(egui::DragValue::new(&mut voices).speed(0.1))
                .on_hover_text(inlet_text(1));
            if response.changed() {
                self.send(Message::Voices(voices));
            }

            let response = ui
                .add(egui::DragValue::new(&mut detune).speed(0.001))
                .on_hover_text(inlet_text(2));
            if response.changed() {
                self.send(Message::Detune(detune));
            }
        });

        ui.horizontal(|ui| {
            if ui.button("bang").on_hover_text(inlet_text(0)).clicked() {
                self.send(Message::Bang);
            }
            ui.checkbox(&mut self.bang_on_change, "bang on change");
        });
    }

    fn message_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("message:");
            let response = ui.text_edit_singleline(&mut self.message_line);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                match self.message_line.parse::<Message>() {
                    Ok(message) => {
                        self.message_error = None;
                        self.message_line.clear();
                        self.send(message);
                    }
                    Err(e) => self.message_error = Some(e.to_string()),
                }
                response.request_focus();
            }
        });
        if let Some(error) = &self.message_error {
            ui.colored_label(egui::Color32::LIGHT_RED, error.as_str());
        }
    }

    fn outlets_ui(&self, ui: &mut egui::Ui) {
        let calculator = self.instance.calculator();
        ui.label(format!(
            "{} outlets, detune step {:.3} Hz",
            self.instance.outlet_count(),
            calculator.detune_amount()
        ));

        egui::Grid::new("outlets").striped(true).show(ui, |ui| {
            for (slot, value) in self.instance.outlets().values().iter().enumerate() {
                let text = assist(ChannelKind::Outlet, slot).unwrap_or_default();
                ui.label(format!("outlet {}", slot)).on_hover_text(text);
                ui.monospace(format!("{:>12.3}", value));
                ui.end_row();
            }
        });
    }
}

fn inlet_text(index: usize) -> String {
    assist(ChannelKind::Inlet, index).unwrap_or_else(|| format!("Inlet {}", index))
}

impl eframe::App for PatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("history").show(ctx, |ui| {
            ui.heading("messages");
            egui::ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
                for line in &self.history {
                    ui.monospace(line.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.class.name());
                ui.add(egui::DragValue::new(&mut self.creation_arg).speed(0.1));
                if ui.button("create").clicked() {
                    self.recreate();
                }
            });
            ui.separator();
            self.inlets_ui(ui);
            self.message_ui(ui);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| self.outlets_ui(ui));
        });
    }
}

pub fn run(class: ObjectClass, creation_arg: Option<i64>) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 420.0]),
        ..Default::default()
    };
    let title = class.name().to_string();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(PatchApp::new(class, creation_arg))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bang_on_change_emits_after_each_setter() {
        let mut app = PatchApp::new(ObjectClass::default(), Some(1));
        app.bang_on_change = true;
        app.send(Message::Float(100.0));
        assert_eq!(app.instance.outlets().values(), &[50.0, 150.0, 100.0]);
        assert_eq!(app.history, ["float 100.0", "bang"]);
    }

    #[test]
    fn history_is_bounded() {
        let mut app = PatchApp::new(ObjectClass::default(), None);
        for n in 0..(HISTORY_LEN as i64 + 5) {
            app.send(Message::Voices(n));
        }
        assert_eq!(app.history.len(), HISTORY_LEN);
        assert_eq!(app.history.front().map(String::as_str), Some("in1 5"));
    }

    #[test]
    fn recreate_resizes_outlets() {
        let mut app = PatchApp::new(ObjectClass::default(), None);
        app.creation_arg = 4;
        app.recreate();
        assert_eq!(app.instance.outlet_count(), 9);
    }
}
