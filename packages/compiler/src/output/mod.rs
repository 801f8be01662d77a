//! Output Module
//!
//! Code generation (AOT), in-memory construction (JIT) and loading of
//! compiled source, all driven by one emit plan.

pub mod abstract_emitter;
pub mod emit_plan;
pub mod output_aot;
pub mod output_ast;
pub mod output_jit;
pub mod source_reader;

pub use emit_plan::{EmitPlan, MessagePlan, MessageSink};
pub use output_aot::{compile, compile_message, compile_module, AotCompiler};
pub use output_jit::{jit, jit_message, JitBuilder};
pub use source_reader::read_compiled;
