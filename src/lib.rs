//! Freehand drawing engine for a layered canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It smooths
//! raw pointer input through a lazy brush, renders strokes as chains of
//! quadratic curves, and keeps the drawing in sync with a history owned by
//! the host: appending a stroke animates only the new part, undo and clear
//! redraw at once. The host JavaScript layer wires DOM events and
//! `requestAnimationFrame` to the engine and stores the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Render loop and testable [`engine::EngineCore`] |
//! | [`web`] | Browser canvases and the top-level [`web::Engine`] |
//! | [`stroke`] | Strokes and revisioned [`stroke::History`] |
//! | [`lazy`] | Lazy pointer that drags the brush on a chain |
//! | [`input`] | Pointer kinds, gesture state, and the stroke being sampled |
//! | [`curve`] | Quadratic-curve stroke rendering |
//! | [`reconcile`] | Diffing a new history against the drawn one |
//! | [`animation`] | Progressive reveal of new points over time |
//! | [`interface`] | Brush, pointer, chain and grid overlays |
//! | [`catenary`] | Sagging chain between pointer and brush |
//! | [`surface`] | Layer identifiers, paths, and the [`surface::Layers`] trait |
//! | [`recording`] | Headless [`surface::Layers`] that records draw calls |
//! | [`config`] | Engine settings |
//! | [`point`] | 2D point arithmetic |
//! | [`error`] | Error type |
//! | [`consts`] | Shared defaults and drawing constants |

pub mod animation;
pub mod catenary;
pub mod config;
pub mod consts;
pub mod curve;
pub mod engine;
pub mod error;
pub mod input;
pub mod interface;
pub mod lazy;
pub mod point;
pub mod recording;
pub mod reconcile;
pub mod stroke;
pub mod surface;
pub mod web;
