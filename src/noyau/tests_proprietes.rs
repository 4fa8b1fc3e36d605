//! Propriétés (proptest) de la mémoire de la calculatrice.

use proptest::prelude::*;

use super::format::formater_resultat;
use super::{Calculatrice, Outcome, HISTORY_MAX};

fn expr_arithmetique() -> impl Strategy<Value = String> {
    let atome = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        Just("pi".to_string()),
        Just("e".to_string()),
    ];
    atome.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!['+', '-', '*', '/', '%', '^']),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.clone().prop_map(|a| format!("({a})")),
            (prop::sample::select(vec!["sin", "cos", "tan", "log", "ln", "sqrt"]), inner)
                .prop_map(|(f, a)| format!("{f}({a})")),
        ]
    })
}

proptest! {
    /// Même texte + même table + même mode => même issue.
    #[test]
    fn submit_deterministe(expr in expr_arithmetique(), degres in any::<bool>()) {
        let mut a = Calculatrice::default();
        let mut b = Calculatrice::default();
        if !degres {
            a.toggle_degrees();
            b.toggle_degrees();
        }
        prop_assert_eq!(a.submit(&expr), b.submit(&expr));
    }

    /// `nom = valeur` puis `nom` redonne exactement la valeur.
    #[test]
    fn affectation_aller_retour(nom in "[a-z]{1,6}", n in 0u32..1_000_000, frac in 0u32..100) {
        // un nom de fonction ("sin") est simplement masqué par la variable
        let texte = format!("{n}.{frac:02}");
        let attendu: f64 = texte.parse().unwrap();

        let mut c = Calculatrice::default();
        let issue = c.submit(&format!("{nom} = {texte}"));
        prop_assert_eq!(issue, Outcome::Assigned(formater_resultat(attendu)));
        prop_assert_eq!(c.variable(&nom), Some(attendu));

        match c.submit(&nom) {
            Outcome::Evaluated(_) => prop_assert_eq!(c.variable("ans"), Some(attendu)),
            autre => prop_assert!(false, "relecture de {} => {:?}", nom, autre),
        }
    }

    /// L’historique ne dépasse jamais HISTORY_MAX ; la plus récente est présente.
    #[test]
    fn historique_borne(n in 0usize..120) {
        let mut c = Calculatrice::default();
        for i in 0..n {
            let _ = c.submit(&format!("{i}*1"));
            prop_assert!(c.history_len() <= HISTORY_MAX);
        }
        prop_assert_eq!(c.history_len(), n.min(HISTORY_MAX));
        if n > 0 {
            let derniere = format!("{}*1 = {}", n - 1, n - 1);
            prop_assert_eq!(c.history().last(), Some(derniere.as_str()));
        }
    }

    /// N fois haut => la plus ancienne ; une fois de plus => on y reste.
    #[test]
    fn rappel_sature_sur_la_plus_ancienne(n in 1usize..60) {
        let mut c = Calculatrice::default();
        for i in 0..n {
            let _ = c.submit(&format!("{i}+1"));
        }
        let len = c.history_len();
        let plus_ancienne = c
            .history()
            .next()
            .map(|l| l.split(" = ").next().unwrap_or(l).to_string());

        let mut dernier = None;
        for _ in 0..len {
            dernier = c.cycle_up();
        }
        prop_assert_eq!(&dernier, &plus_ancienne);
        prop_assert_eq!(c.cycle_up(), plus_ancienne);
    }
}
