//! Noyau — mémoire de la calculatrice
//!
//! Seul composant avec un état :
//! - expression en cours (texte brut)
//! - table des variables (pi, e, ans + variables utilisateur)
//! - historique borné (HISTORY_MAX entrées, la plus ancienne sort en premier)
//! - curseur de rappel (haut/bas) et mode degrés/radians
//!
//! Tokenize -> RPN -> évaluation restent des fonctions pures : la mémoire leur
//! passe la table des variables et le mode d’angle.
//!
//! Contrats :
//! - `ans` est toujours présent dans la table.
//! - len(historique) <= HISTORY_MAX.
//! - Un échec vide l’expression en cours, le reste de l’état est conservé.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use super::erreurs::{ErreurAffectation, ErreurCalcul, ErreurEval};
use super::eval::evaluate_postfix;
use super::format::formater_resultat;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{format_rpn, to_postfix};

/// Nombre maximal d’entrées conservées dans l’historique.
pub const HISTORY_MAX: usize = 50;

/// Opérateurs qui, tapés juste après un résultat, le prolongent au lieu de l’effacer.
const OPERATEURS_CONTINUATION: &str = "%/+-*^";

/// Séparateur entre l’entrée et le résultat dans une ligne d’historique.
const SEPARATEUR: &str = " = ";

/// Issue d’une soumission (exactement une par appel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Assigned(String),
    Evaluated(String),
    Failed(String),
    NoOp,
}

/// Réglages de départ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub use_degrees: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        // comme la calculatrice d’origine : degrés au lancement
        Self { use_degrees: true }
    }
}

/// Démarche de la dernière évaluation réussie (jetons + RPN).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    expression: String,
    dernier_resultat: String,
    has_result: bool,
    use_degrees: bool,

    variables: BTreeMap<String, f64>,
    historique: VecDeque<String>,
    curseur: Option<usize>,

    demarche: Option<Demarche>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::with_settings(Reglages::default())
    }
}

impl Calculatrice {
    pub fn with_settings(reglages: Reglages) -> Self {
        Self {
            expression: String::new(),
            dernier_resultat: String::new(),
            has_result: false,
            use_degrees: reglages.use_degrees,
            variables: variables_initiales(),
            historique: VecDeque::with_capacity(HISTORY_MAX + 1),
            curseur: None,
            demarche: None,
        }
    }

    /* ------------------------ Lecture (vue) ------------------------ */

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Dernier résultat formaté, ou message d’erreur.
    pub fn last_result(&self) -> &str {
        &self.dernier_resultat
    }

    pub fn has_result(&self) -> bool {
        self.has_result
    }

    pub fn use_degrees(&self) -> bool {
        self.use_degrees
    }

    /// Historique, du plus ancien au plus récent.
    pub fn history(&self) -> impl Iterator<Item = &str> + '_ {
        self.historique.iter().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.historique.len()
    }

    /// Variables, par ordre alphabétique.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn variable(&self, nom: &str) -> Option<f64> {
        self.variables.get(nom).copied()
    }

    pub fn last_steps(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }

    /* ------------------------ Soumission ------------------------ */

    /// Évalue l’expression en cours (touche "=").
    /// Sans effet si elle affiche déjà un résultat.
    pub fn evaluate(&mut self) -> Outcome {
        if self.has_result {
            self.curseur = None;
            return Outcome::NoOp;
        }
        let texte = std::mem::take(&mut self.expression);
        self.submit(&texte)
    }

    /// Évalue `texte` : affectation `nom = expr` ou expression simple.
    /// Le texte vide est sans effet ; des blancs seuls sont une erreur de syntaxe.
    /// L’historique garde le texte tel que saisi.
    pub fn submit(&mut self, texte: &str) -> Outcome {
        self.curseur = None;

        if texte.is_empty() {
            return Outcome::NoOp;
        }

        let issue = match texte.split_once('=') {
            Some((nom, expr)) => self
                .affecter(nom.trim(), expr.trim())
                .map(Outcome::Assigned),
            None => self.calculer(texte).map(Outcome::Evaluated),
        };

        self.has_result = true;
        match issue {
            Ok(issue) => issue,
            Err(e) => {
                let message = e.to_string();
                debug!(entree = %texte, erreur = %message, "échec de l’évaluation");
                self.expression.clear();
                self.dernier_resultat = message.clone();
                Outcome::Failed(message)
            }
        }
    }

    /// `nom` : lettres seulement (`is_alphabetic`). Un nom hors `[a-z]+` est
    /// stocké mais illisible ensuite, le découpage en jetons ne le voit pas.
    fn affecter(&mut self, nom: &str, expr: &str) -> Result<String, ErreurCalcul> {
        if nom.is_empty() || !nom.chars().all(char::is_alphabetic) {
            return Err(ErreurAffectation::BadVariableName.into());
        }

        let valeur = self.pipeline(expr)?;
        self.variables.insert(nom.to_string(), valeur);

        let affiche = formater_resultat(valeur);
        debug!(variable = nom, valeur = %affiche, "affectation");
        self.consigner(format!("{nom}{SEPARATEUR}{affiche}"), &affiche);
        Ok(affiche)
    }

    fn calculer(&mut self, texte: &str) -> Result<String, ErreurCalcul> {
        let valeur = self.pipeline(texte)?;
        self.variables.insert("ans".into(), valeur);

        let affiche = formater_resultat(valeur);
        debug!(entree = texte, resultat = %affiche, "évaluation");
        self.consigner(format!("{texte}{SEPARATEUR}{affiche}"), &affiche);
        Ok(affiche)
    }

    /// tokenize -> RPN -> évaluation (+ démarche si succès).
    fn pipeline(&mut self, expr: &str) -> Result<f64, ErreurCalcul> {
        let jetons = tokenize(expr);
        let rpn = to_postfix(&jetons, &self.variables)?;
        let valeur = evaluate_postfix(&rpn, self.use_degrees)?;

        if !valeur.is_finite() {
            return Err(ErreurEval::NonFinite.into());
        }

        self.demarche = Some(Demarche {
            jetons: format_jetons(&jetons),
            rpn: format_rpn(&rpn),
        });
        Ok(valeur)
    }

    /// Ajoute une ligne d’historique (éviction FIFO) et affiche le résultat.
    fn consigner(&mut self, ligne: String, affiche: &str) {
        self.historique.push_back(ligne);
        while self.historique.len() > HISTORY_MAX {
            if let Some(vieille) = self.historique.pop_front() {
                debug!(entree = %vieille, "historique plein, entrée la plus ancienne retirée");
            }
        }

        self.expression = affiche.to_string();
        self.dernier_resultat = affiche.to_string();
    }

    /* ------------------------ Édition ------------------------ */

    /// Remplace le texte en cours (champ édité directement par l’utilisateur).
    /// Le texte redevient une saisie : plus de résultat affiché.
    pub fn set_expression(&mut self, texte: impl Into<String>) {
        self.curseur = None;
        self.has_result = false;
        self.expression = texte.into();
    }

    /// Après un résultat : un opérateur prolonge le résultat, tout autre caractère repart de zéro.
    pub fn append_char(&mut self, c: char) {
        self.curseur = None;
        if self.has_result {
            self.has_result = false;
            if !OPERATEURS_CONTINUATION.contains(c) {
                self.expression.clear();
            }
        }
        self.expression.push(c);
    }

    /// Comme `append_char`, pour un fragment ("sin(").
    pub fn append_str(&mut self, s: &str) {
        let mut chars = s.chars();
        if let Some(c) = chars.next() {
            self.append_char(c);
            self.expression.extend(chars);
        }
    }

    /// Sans effet juste après un résultat.
    pub fn backspace(&mut self) {
        self.curseur = None;
        if !self.has_result {
            self.expression.pop();
        }
    }

    /// AC : texte, résultat et curseur. Variables, historique et mode restent.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.dernier_resultat.clear();
        self.has_result = false;
        self.curseur = None;
    }

    /// Remise à zéro explicite : en plus de `clear`, variables et historique.
    /// Le mode d’angle reste.
    pub fn reset(&mut self) {
        self.clear();
        self.variables = variables_initiales();
        self.historique.clear();
        self.demarche = None;
    }

    pub fn toggle_degrees(&mut self) -> bool {
        self.use_degrees = !self.use_degrees;
        debug!(degres = self.use_degrees, "mode d’angle");
        self.use_degrees
    }

    /* ------------------------ Rappel (haut/bas) ------------------------ */

    /// Vers les entrées plus anciennes ; depuis "aucun", saute à la plus récente.
    pub fn cycle_up(&mut self) -> Option<String> {
        let dernier = self.historique.len().checked_sub(1)?;
        let i = match self.curseur {
            None => dernier,
            Some(i) => i.saturating_sub(1),
        };
        self.rappeler(i)
    }

    /// Vers les entrées plus récentes ; au-delà de la plus récente, revient à "aucun" et vide le texte.
    pub fn cycle_down(&mut self) -> Option<String> {
        let i = self.curseur? + 1;
        if i >= self.historique.len() {
            self.curseur = None;
            self.expression.clear();
            return Some(String::new());
        }
        self.rappeler(i)
    }

    fn rappeler(&mut self, i: usize) -> Option<String> {
        let ligne = self.historique.get(i)?;
        let entree = ligne.split(SEPARATEUR).next().unwrap_or(ligne).to_string();

        debug!(index = i, entree = %entree, "rappel historique");
        self.curseur = Some(i);
        self.has_result = false;
        self.expression = entree.clone();
        Some(entree)
    }
}

fn variables_initiales() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("pi".to_string(), std::f64::consts::PI),
        ("e".to_string(), std::f64::consts::E),
        ("ans".to_string(), 0.0),
    ])
}
