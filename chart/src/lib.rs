//! Bodygraph chart engine.
//!
//! Turns the output of an external chart collaborator (labels, active gates,
//! active channel tokens, planet activations) into a [`ChartResult`]: which
//! of the nine centers are defined, which four gates form the incarnation
//! cross, and the collaborator's labels carried through untouched.
//!
//! # Pipeline
//!
//! | Stage | Type |
//! |-------|------|
//! | Channel token → gate pair | [`ChannelDecoder`] |
//! | Activation token → gate and line | [`ActivationParser`] |
//! | Channel tokens → defined/undefined centers | [`CenterDefinitionResolver`] |
//! | Sun/Earth activations → cross gates | [`CrossGateExtractor`] |
//! | Everything → result record | [`ChartResultAssembler`] |
//!
//! [`Engine`] wires the stages together.
//!
//! # Entry Point
//!
//! ```
//! use bodygraph_chart::Engine;
//!
//! let engine = Engine::standard().unwrap();
//! let def = engine.resolver().resolve(["Key1Key8", "Key2Key14"]);
//! assert_eq!(def.defined.len(), 3);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod activation;
pub mod assembler;
pub mod config;
pub mod cross;
pub mod decoder;
pub mod engine;
pub mod resolver;
pub mod source;

pub use activation::{Activation, ActivationMap, ActivationParser, PlanetActivation};
pub use assembler::{ActivationSummary, ChannelDescriptor, ChartResult, ChartResultAssembler};
pub use config::{DecoderConfig, EngineConfig};
pub use cross::{CrossGateExtractor, CrossGates, MISSING_GATE};
pub use decoder::{ChannelDecoder, GatePair};
pub use engine::Engine;
pub use resolver::{CenterDefinition, CenterDefinitionResolver};
pub use source::{ChartLabels, ChartSource};

pub use bodygraph_spec::{Center, ChartError, Gate, GateCenterTable, Imprint, Planet};
