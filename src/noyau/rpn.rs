// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Jeton (infixe) en RPN (postfix)
//
// Règles:
// - Ident(name), dans cet ordre :
//    - variable connue   => remplacée par sa valeur (au moment de la traduction)
//    - fonction connue   => empilée, sortie après sa parenthèse fermante
//    - sinon             => "Unknown token"
// - Opérateurs : tous associatifs à gauche, `^` compris (rang égal => on dépile).
//   Donc 2^3^2 = (2^3)^2 = 64.
// - Pas de moins unaire : "-3" échoue plus tard ("Missing operand").

use std::collections::BTreeMap;
use std::fmt;

use super::erreurs::ErreurSyntaxe;
use super::fonctions::Fonction;
use super::jetons::{Jeton, Operateur};

/// Élément d’une suite postfixe : plus de parenthèses, plus d’identifiants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRpn {
    Nombre(f64),
    Op(Operateur),
    Fonction(Fonction),
}

impl fmt::Display for ElementRpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRpn::Nombre(x) => write!(f, "{x}"),
            ElementRpn::Op(op) => write!(f, "{}", op.symbole()),
            ElementRpn::Fonction(fct) => f.write_str(fct.nom()),
        }
    }
}

/// Contenu possible de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Operateur),
    Fonction(Fonction),
    LPar,
}

impl Pile {
    fn vers_sortie(self) -> Option<ElementRpn> {
        match self {
            Pile::Op(op) => Some(ElementRpn::Op(op)),
            Pile::Fonction(f) => Some(ElementRpn::Fonction(f)),
            Pile::LPar => None,
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), LPar, Nombre(90), RPar, Op(+), Nombre(1)]
///   rpn:    [Nombre(90), Fonction(Sin), Nombre(1), Op(+)]
pub fn to_postfix(
    jetons: &[Jeton],
    variables: &BTreeMap<String, f64>,
) -> Result<Vec<ElementRpn>, ErreurSyntaxe> {
    let mut out: Vec<ElementRpn> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Pile> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(x) => out.push(ElementRpn::Nombre(*x)),

            Jeton::Ident(nom) => {
                if let Some(valeur) = variables.get(nom) {
                    out.push(ElementRpn::Nombre(*valeur));
                } else if let Some(f) = Fonction::depuis_nom(nom) {
                    ops.push(Pile::Fonction(f));
                } else {
                    return Err(ErreurSyntaxe::UnknownToken(nom.clone()));
                }
            }

            Jeton::Op(op) => {
                // dépile tant que le sommet est un opérateur de rang >= (gauche-associatif)
                // '(' et les fonctions bloquent
                while let Some(Pile::Op(top)) = ops.last().copied() {
                    if top.rang() < op.rang() {
                        break;
                    }
                    ops.pop();
                    out.push(ElementRpn::Op(top));
                }
                ops.push(Pile::Op(*op));
            }

            Jeton::LPar => ops.push(Pile::LPar),

            Jeton::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => déséquilibre
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(autre) => out.extend(autre.vers_sortie()),
                        None => return Err(ErreurSyntaxe::MismatchedParentheses),
                    }
                }

                // fonction au sommet : collée au groupe qu’on vient de fermer
                if let Some(Pile::Fonction(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(ElementRpn::Fonction(f));
                }
            }

            Jeton::Egal => return Err(ErreurSyntaxe::UnknownToken("=".into())),
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top.vers_sortie() {
            Some(e) => out.push(e),
            None => return Err(ErreurSyntaxe::MismatchedParentheses),
        }
    }

    Ok(out)
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[ElementRpn]) -> String {
    rpn.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
