//! Tests scientifiques (campagne) : valeurs connues + invariants, dans les deux modes d’angle.
//!
//! Notes (alignées avec le comportement actuel du noyau) :
//! - `^` est associatif à gauche : 2^3^2 = 64.
//! - Pas de moins unaire : on écrit (0-x).
//! - Les résultats de fonctions sous 1e-15 sont ramenés à 0.

use super::{Calculatrice, Outcome, Reglages};

fn calc_deg() -> Calculatrice {
    Calculatrice::with_settings(Reglages { use_degrees: true })
}

fn calc_rad() -> Calculatrice {
    Calculatrice::with_settings(Reglages { use_degrees: false })
}

fn assert_affiche(c: &mut Calculatrice, expr: &str, attendu: &str) {
    match c.submit(expr) {
        Outcome::Evaluated(r) | Outcome::Assigned(r) => {
            assert_eq!(r, attendu, "expr={expr:?}")
        }
        autre => panic!("expr={expr:?} => {autre:?}"),
    }
}

fn assert_echec(c: &mut Calculatrice, expr: &str, morceau: &str) {
    match c.submit(expr) {
        Outcome::Failed(m) => assert!(m.contains(morceau), "expr={expr:?} message={m:?}"),
        autre => panic!("expr={expr:?} devait échouer => {autre:?}"),
    }
    assert_eq!(c.expression(), "", "expr={expr:?} : texte non vidé");
}

/* ------------------------ Angles remarquables (degrés) ------------------------ */

#[test]
fn sci_angles_degres() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "sin(0)", "0");
    assert_affiche(&mut c, "sin(30)", "0.5");
    assert_affiche(&mut c, "sin(90)", "1");
    assert_affiche(&mut c, "sin(180)", "0");
    assert_affiche(&mut c, "cos(0)", "1");
    assert_affiche(&mut c, "cos(90)", "0");
    assert_affiche(&mut c, "cos(180)", "-1");
    assert_affiche(&mut c, "tan(45)", "1");
    assert_affiche(&mut c, "sin(45)^2", "0.5");
}

/* ------------------------ Radians ------------------------ */

#[test]
fn sci_angles_radians() {
    let mut c = calc_rad();
    assert_affiche(&mut c, "sin(pi)", "0");
    assert_affiche(&mut c, "cos(pi)", "-1");
    assert_affiche(&mut c, "sin(pi/2)", "1");
    assert_affiche(&mut c, "cos(pi/3)", "0.5");
    assert_affiche(&mut c, "sin(1)", "0.84147098");
}

#[test]
fn sci_bascule_du_mode() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "sin(90)", "1");
    assert!(!c.toggle_degrees());
    assert_affiche(&mut c, "sin(90)", "0.89399666");
    assert!(c.toggle_degrees());
    assert_affiche(&mut c, "sin(90)", "1");
}

/* ------------------------ Logarithmes + racines ------------------------ */

#[test]
fn sci_logarithmes() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "log(1000)", "3");
    assert_affiche(&mut c, "ln(e)", "1");
    assert_affiche(&mut c, "ln(e^2)", "2");
    assert_affiche(&mut c, "log(2)", "0.30103");
    assert_affiche(&mut c, "sqrt(2)", "1.41421356");
    assert_affiche(&mut c, "sqrt(sqrt(16))", "2");
    assert_echec(&mut c, "log(0)", "Math domain error");
    assert_echec(&mut c, "sqrt(0-9)", "Math domain error");
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "2+3*4", "14");
    assert_affiche(&mut c, "(2+3)*4", "20");
    assert_affiche(&mut c, "2*3^2", "18");
    assert_affiche(&mut c, "2^3^2", "64");
    assert_affiche(&mut c, "100/10/5", "2");
    assert_affiche(&mut c, "10-4+3", "9");
    assert_affiche(&mut c, "17%5*2", "4");
    assert_affiche(&mut c, "0.1+0.2", "0.3");
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_affichage_extremes() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "1/3", "0.33333333");
    assert_affiche(&mut c, "1/3000000", "3.333e-07");
    assert_affiche(&mut c, "10^13+0.5", "1e+13");
    assert_affiche(&mut c, "10^15", "1000000000000000");
}

/* ------------------------ Fautes récupérables ------------------------ */

#[test]
fn sci_fautes_recuperables() {
    let mut c = calc_deg();
    assert_echec(&mut c, "10/0", "Division by zero");
    assert_echec(&mut c, "sin(90", "Mismatched parentheses");
    assert_echec(&mut c, "2+)", "Mismatched parentheses");
    assert_echec(&mut c, "foo*2", "Unknown token: foo");
    assert_echec(&mut c, "-5", "Missing operand");
    assert_echec(&mut c, "sqrt()", "Missing argument");
    assert_echec(&mut c, "2 3", "Invalid syntax");
    assert_echec(&mut c, "9x = 1", "Bad variable name");

    // la calculatrice reste utilisable
    assert_affiche(&mut c, "1+1", "2");
    assert_eq!(c.history_len(), 1);
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_ans_enchaine() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "ans", "0");
    assert_affiche(&mut c, "6*7", "42");
    assert_affiche(&mut c, "ans/2", "21");
    assert_affiche(&mut c, "ans+ans", "42");
}

#[test]
fn sci_variables_utilisateur() {
    let mut c = calc_deg();
    assert_affiche(&mut c, "r = 2", "2");
    assert_affiche(&mut c, "pi*r^2", "12.56637061");
    assert_affiche(&mut c, "r = r+1", "3");
    assert_affiche(&mut c, "r", "3");
    // un nom en majuscules est accepté mais jamais relu (tokenisation en minuscules)
    assert_affiche(&mut c, "R = 9", "9");
    assert_echec(&mut c, "R+1", "Missing operand");
}
