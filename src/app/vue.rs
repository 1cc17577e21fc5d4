// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran = projection d’affichage du noyau (lecture seule)
// - Pavé tactile : chaque bouton envoie une Commande (même chemin que le clavier)
//
// Note :
// - Le clavier est lu dans app.rs (événements bruts), pas ici.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::nombre::ecrire;
use crate::noyau::{Commande, Operateur, Saisie};

/// Taille d’un bouton du pavé.
const BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading(crate::TITRE_APP);
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.acc.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.ecran)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });
            });

        // rappel du “=” répété
        let memo = match self.acc.memoire() {
            Some((op, b)) => format!("= répète : {} {}", op.symbole(), ecrire(b)),
            None => String::new(),
        };
        ui.small(memo);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Commande::{EffacerEntree, Evaluer, ToutEffacer};

        egui::Grid::new("pave_calculette")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", ToutEffacer);
                self.bouton(ui, "CE", EffacerEntree);
                self.bouton_op(ui, Operateur::Divise);
                self.bouton_op(ui, Operateur::Fois);
                ui.end_row();

                for (rangee, op) in [
                    (['7', '8', '9'], Operateur::Moins),
                    (['4', '5', '6'], Operateur::Plus),
                ] {
                    for c in rangee {
                        self.bouton_chiffre(ui, c);
                    }
                    self.bouton_op(ui, op);
                    ui.end_row();
                }

                for c in ['1', '2', '3'] {
                    self.bouton_chiffre(ui, c);
                }
                self.bouton(ui, "=", Evaluer);
                ui.end_row();

                self.bouton_chiffre(ui, '0');
                self.bouton(ui, ".", Commande::Saisie(Saisie::Point));
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        self.bouton(ui, &c.to_string(), Commande::Saisie(Saisie::Chiffre(c)));
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, &op.symbole().to_string(), Commande::Saisie(Saisie::Op(op)));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, cmd: Commande) {
        let resp = ui.add_sized(BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.executer(cmd);
        }
    }
}
