// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap, traces, puis
//     - mode ligne si des expressions (ou --stdin) sont données
//     - sinon eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

use calculatrice_bureau::app::AppCalc;
use calculatrice_bureau::noyau::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io;

    use clap::Parser;
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    use calculatrice_bureau::ligne::{evaluer_lecteur, evaluer_lignes};
    use calculatrice_bureau::noyau::{Calculatrice, Reglages};

    /// Calculatrice de bureau : priorités, parenthèses, variables,
    /// fonctions trigonométriques/logarithmiques, historique.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Démarre en radians (par défaut : degrés).
        #[arg(long)]
        pub radians: bool,

        /// Filtre des traces (ex: "debug"). Par défaut : RUST_LOG, sinon "warn".
        #[arg(long, value_name = "FILTRE")]
        pub log: Option<String>,

        /// Lit une expression par ligne sur l’entrée standard (sans fenêtre).
        #[arg(long)]
        pub stdin: bool,

        /// Expressions à évaluer dans l’ordre (sans fenêtre).
        pub expressions: Vec<String>,
    }

    impl Args {
        pub fn reglages(&self) -> Reglages {
            Reglages {
                use_degrees: !self.radians,
            }
        }

        pub fn mode_ligne(&self) -> bool {
            self.stdin || !self.expressions.is_empty()
        }
    }

    /// Traces sur stderr (stdout reste aux résultats du mode ligne).
    pub fn installer_traces(filtre: Option<&str>) {
        let filtre = match filtre {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(io::stderr)
            .init();
    }

    /// Mode ligne : code de sortie 0 si tout a réussi, 1 sinon, 2 si E/S en échec.
    pub fn mode_ligne(args: &Args) -> i32 {
        info!(
            degres = !args.radians,
            stdin = args.stdin,
            n = args.expressions.len(),
            "mode ligne"
        );

        let mut calc = Calculatrice::with_settings(args.reglages());
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();

        let res = executer(args, &mut calc, &mut out, &mut err);

        match res {
            Ok(0) => 0,
            Ok(_) => 1,
            Err(e) => {
                error!(erreur = %e, "entrée/sortie");
                2
            }
        }
    }

    fn executer(
        args: &Args,
        calc: &mut Calculatrice,
        out: &mut impl io::Write,
        err: &mut impl io::Write,
    ) -> io::Result<usize> {
        let mut echecs = evaluer_lignes(calc, &args.expressions, out, err)?;
        if args.stdin {
            echecs += evaluer_lecteur(calc, io::stdin().lock(), out, err)?;
        }
        Ok(echecs)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::installer_traces(args.log.as_deref());

    if args.mode_ligne() {
        std::process::exit(natif::mode_ligne(&args));
    }

    let reglages: Reglages = args.reglages();
    tracing::info!(degres = reglages.use_degrees, "démarrage de l’interface");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
