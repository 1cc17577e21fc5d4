// src/app.rs
//
// Calculette à touches — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier passe par les événements bruts de egui :
//   Text("7"), Text("+"), Text("=")... pour les caractères,
//   Key{Enter|Escape|Backspace} pour les touches de contrôle.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        for ev in events {
            match ev {
                egui::Event::Text(t) => self.texte(&t),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    // chiffres / opérateurs arrivent déjà en Text : pas de double saisie
                    if matches!(
                        key,
                        egui::Key::Enter | egui::Key::Escape | egui::Key::Backspace
                    ) {
                        self.touche(key.name());
                    }
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
