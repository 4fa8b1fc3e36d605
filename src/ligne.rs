// src/ligne.rs
//
// Mode ligne : une expression par entrée, une réponse par ligne.
// - succès => résultat formaté sur `out`
// - échec  => "Error: <message>" sur `err`
// Toutes les lignes passent par la même mémoire (les affectations se suivent).

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::noyau::{Calculatrice, Outcome};

/// Évalue chaque ligne dans l’ordre. Retourne le nombre d’échecs.
pub fn evaluer_lignes<I, S>(
    calc: &mut Calculatrice,
    lignes: I,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut echecs = 0;

    for ligne in lignes {
        let ligne = ligne.as_ref();
        // lignes blanches ignorées (fichiers aérés)
        if ligne.trim().is_empty() {
            continue;
        }
        match calc.submit(ligne) {
            Outcome::Evaluated(r) | Outcome::Assigned(r) => writeln!(out, "{r}")?,
            Outcome::Failed(msg) => {
                echecs += 1;
                writeln!(err, "Error: {msg}")?;
            }
            Outcome::NoOp => {}
        }
    }

    debug!(echecs, historique = calc.history_len(), "mode ligne terminé");
    Ok(echecs)
}

/// Variante lecteur (stdin) : lit jusqu’à la fin, une expression par ligne.
pub fn evaluer_lecteur(
    calc: &mut Calculatrice,
    lecteur: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<usize> {
    let lignes = lecteur.lines().collect::<io::Result<Vec<_>>>()?;
    evaluer_lignes(calc, lignes, out, err)
}
