//! Noyau de la calculatrice de bureau
//!
//! Organisation interne :
//! - jetons.rs      : tokenisation
//! - rpn.rs         : shunting-yard (infixe -> postfix) + substitution des variables
//! - fonctions.rs   : sin cos tan log ln sqrt (dispatch unique, mode d’angle)
//! - eval.rs        : évaluation de la RPN (pile d’opérandes)
//! - format.rs      : affichage d’un résultat
//! - erreurs.rs     : syntaxe / évaluation / affectation
//! - calculatrice.rs: mémoire (variables, historique, rappel, mode d’angle)

pub mod calculatrice;
pub mod erreurs;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::{Calculatrice, Demarche, Outcome, Reglages, HISTORY_MAX};
