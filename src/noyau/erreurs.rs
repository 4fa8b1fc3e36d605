//! Noyau — erreurs
//!
//! Trois familles, toutes récupérables :
//! - ErreurSyntaxe     : flux de jetons mal formé (traduction RPN)
//! - ErreurEval        : fautes arithmétiques à l’évaluation
//! - ErreurAffectation : nom de variable invalide à gauche de `=`
//!
//! Le texte affiché (`Display`) est le message montré tel quel par la vue.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Missing operand")]
    MissingOperand,

    #[error("Missing argument")]
    MissingArgument,

    #[error("Division by zero")]
    DivisionByZero,

    /// Pile finale vide ou avec plus d’une valeur.
    #[error("Invalid syntax")]
    InvalidSyntax,

    #[error("Math domain error")]
    MathDomain,

    #[error("Result is not a finite number")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurAffectation {
    #[error("Bad variable name")]
    BadVariableName,
}

/// Union vue par la mémoire (calculatrice.rs) : chaque étape remonte avec `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error(transparent)]
    Eval(#[from] ErreurEval),

    #[error(transparent)]
    Affectation(#[from] ErreurAffectation),
}
