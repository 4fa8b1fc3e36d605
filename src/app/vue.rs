// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Haut/Bas rappellent l’historique (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
                self.ui_variables(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, sin(30), r = 2, pi*r^2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier (seulement si le champ est focus) ---
        // Enter fait perdre le focus au champ mono-ligne : on accepte les deux cas.
        let (enter, haut, bas) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
            )
        });
        if enter && (resp.has_focus() || resp.lost_focus()) {
            self.evaluer();
        } else if resp.has_focus() && haut {
            self.rappel_haut();
        } else if resp.has_focus() && bas {
            self.rappel_bas();
        }

        ui.add_space(6.0);

        // Résultat (ou erreur)
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if self.erreur.is_empty() {
                    ui.monospace(egui::RichText::new(&self.resultat).size(26.0));
                } else {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Actions
        ui.horizontal(|ui| {
            self.bouton_action(ui, "AC", "Efface l’entrée et le résultat", Action::Clear);
            self.bouton_action(
                ui,
                "RàZ",
                "Efface aussi variables et historique",
                Action::Reset,
            );
            self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);

            ui.separator();

            let mode = if self.calc.use_degrees() { "DEG" } else { "RAD" };
            self.bouton_action(ui, mode, "Bascule degrés / radians", Action::Degres);
            self.bouton_action(ui, "STO", "Affectation : nom = expression", Action::Sto);
        });

        ui.add_space(6.0);

        // Fonctions + constantes
        ui.horizontal_wrapped(|ui| {
            for f in ["sin", "cos", "tan", "log", "ln", "sqrt"] {
                self.bouton_insert(ui, f, &format!("{f}("));
            }
            ui.separator();
            for c in ["pi", "e", "ans"] {
                self.bouton_insert(ui, c, c);
            }
        });

        ui.add_space(6.0);

        // Pavé numérique
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [
                    ["7", "8", "9", "/", "("],
                    ["4", "5", "6", "*", ")"],
                    ["1", "2", "3", "-", "^"],
                    ["0", ".", "%", "+", "="],
                ] {
                    for touche in ligne {
                        if touche == "=" {
                            let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                            if eq.clicked() {
                                self.evaluer();
                            }
                        } else {
                            self.bouton_insert(ui, touche, touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let titre = format!("Historique ({})", self.calc.history_len());
        let resp = egui::CollapsingHeader::new(titre)
            .open(Some(self.historique_ouvert))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("historique_defilement")
                    .max_height(160.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for ligne in self.calc.history() {
                            ui.monospace(ligne);
                        }
                    });
            });
        if resp.header_response.clicked() {
            self.historique_ouvert = !self.historique_ouvert;
        }
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Variables")
            .default_open(false)
            .show(ui, |ui| {
                egui::Grid::new("variables").num_columns(2).show(ui, |ui| {
                    for (nom, valeur) in self.calc.variables() {
                        ui.monospace(nom);
                        ui.monospace(valeur.to_string());
                        ui.end_row();
                    }
                });
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.calc.last_steps() {
                Some(d) => {
                    ui.label("Jetons :");
                    ui.monospace(&d.jetons);
                    ui.label("RPN :");
                    ui.monospace(&d.rpn);
                }
                None => {
                    ui.monospace("indisponible");
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Clear => self.clear_entree(),
                Action::Reset => self.reset_total(),
                Action::Backspace => self.backspace(),
                Action::Degres => self.basculer_degres(),
                Action::Sto => self.saisir("="),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.saisir(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Clear,
    Reset,
    Backspace,
    Degres,
    Sto,
}
