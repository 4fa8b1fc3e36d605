//! Calculatrice de bureau
//!
//! - `noyau` : moteur d’expressions (jetons -> RPN -> évaluation) + mémoire
//! - `app`   : coquille egui/eframe qui pilote la mémoire
//! - `ligne` : mode ligne (sans fenêtre), natif seulement

pub mod app;
pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod ligne;
