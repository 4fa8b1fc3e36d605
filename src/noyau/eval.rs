//! Noyau — évaluation d’une suite RPN
//!
//! Pile d’opérandes, lecture de gauche à droite :
//! - Nombre   => empilé
//! - Op       => dépile b (sommet) puis a, empile `a op b`
//! - Fonction => dépile x, empile f(x) (angle selon le mode)
//!
//! À la fin, il doit rester exactement une valeur.

use super::erreurs::ErreurEval;
use super::jetons::Operateur;
use super::rpn::ElementRpn;

pub fn evaluate_postfix(rpn: &[ElementRpn], use_degrees: bool) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for element in rpn {
        match *element {
            ElementRpn::Nombre(x) => pile.push(x),

            ElementRpn::Op(op) => {
                let b = pile.pop().ok_or(ErreurEval::MissingOperand)?;
                let a = pile.pop().ok_or(ErreurEval::MissingOperand)?;
                pile.push(applique_op(op, a, b)?);
            }

            ElementRpn::Fonction(f) => {
                let x = pile.pop().ok_or(ErreurEval::MissingArgument)?;
                pile.push(f.apply(x, use_degrees)?);
            }
        }
    }

    match pile.as_slice() {
        [x] => Ok(*x),
        _ => Err(ErreurEval::InvalidSyntax),
    }
}

fn applique_op(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            a / b
        }
        Operateur::Modulo => modulo_plancher(a, b)?,
        Operateur::Puissance => {
            let r = a.powf(b);
            // ex: (-8)^(1/3)
            if r.is_nan() && !a.is_nan() && !b.is_nan() {
                return Err(ErreurEval::MathDomain);
            }
            r
        }
    })
}

/// Modulo “plancher” : le reste prend le signe du diviseur (-7 % 3 = 2).
fn modulo_plancher(a: f64, b: f64) -> Result<f64, ErreurEval> {
    if b == 0.0 {
        return Err(ErreurEval::DivisionByZero);
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
