//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier le champ de saisie à la mémoire du noyau (`Calculatrice`)
//! et garder ce que la vue affiche (résultat, erreur, panneaux ouverts).
//!
//! Contrats :
//! - Aucune évaluation ici en dehors de `Calculatrice` (pas de parsing UI).
//! - Le champ `entree` est recopié dans la mémoire avant chaque action.

use crate::noyau::{Calculatrice, Outcome, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- mémoire du noyau ---
    pub calc: Calculatrice,

    // --- entrée utilisateur (miroir éditable de calc.expression()) ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    pub historique_ouvert: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::with_settings(reglages),
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            historique_ouvert: false,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Touche / bouton : un caractère ou un fragment ("sin(").
    pub fn saisir(&mut self, s: &str) {
        self.synchroniser();
        self.calc.append_str(s);
        self.entree = self.calc.expression().to_string();
        self.focus_entree = true;
    }

    pub fn backspace(&mut self) {
        self.synchroniser();
        self.calc.backspace();
        self.entree = self.calc.expression().to_string();
        self.focus_entree = true;
    }

    /// Touche "=".
    pub fn evaluer(&mut self) {
        // les "=" finaux sont retirés (double appui sur "=")
        let texte = self.entree.trim_end().trim_end_matches('=');
        if texte != self.calc.expression() {
            self.calc.set_expression(texte);
        }

        match self.calc.evaluate() {
            Outcome::Evaluated(r) | Outcome::Assigned(r) => {
                self.erreur.clear();
                self.resultat = r;
            }
            Outcome::Failed(msg) => {
                self.resultat.clear();
                self.erreur = format!("Error: {msg}");
            }
            Outcome::NoOp => {}
        }

        self.entree = self.calc.expression().to_string();
        self.focus_entree = true;
    }

    /// AC : entrée + résultat (variables et historique restent).
    pub fn clear_entree(&mut self) {
        self.calc.clear();
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// RàZ : tout, sauf le mode d’angle.
    pub fn reset_total(&mut self) {
        self.calc.reset();
        self.clear_entree();
    }

    pub fn basculer_degres(&mut self) {
        self.calc.toggle_degrees();
        self.focus_entree = true;
    }

    pub fn rappel_haut(&mut self) {
        if let Some(t) = self.calc.cycle_up() {
            self.entree = t;
        }
    }

    pub fn rappel_bas(&mut self) {
        if let Some(t) = self.calc.cycle_down() {
            self.entree = t;
        }
    }

    /// Le champ a pu être édité directement : la mémoire prend le texte affiché.
    fn synchroniser(&mut self) {
        if self.entree != self.calc.expression() {
            self.calc.set_expression(self.entree.clone());
        }
    }
}
