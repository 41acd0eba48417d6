//! `texpp_core` weaves VHDL source fragments into LaTeX documents. A host
//! document carries directive blocks; each block asks for an interface, a usage
//! example or a tagged comment region from a VHDL file, and the rendered
//! fragment replaces the block in the output.
//!
//! ## Processing Pipeline
//!
//! ```text
//! LaTeX document
//!   → Document scanner (copies plain lines, collects \begin{texpp} ... \end{texpp} blocks)
//!   → Directive lexer + parser (splice / query / let / if statements)
//!   → Executor (runs statements against the run context's two primitives)
//!   → Extractor (resolves the VHDL file, runs a region scanner over its lines)
//!   → Renderer (heading, provenance line, code region, or an inline error)
//!   → Output
//! ```
//!
//! ## Directive blocks
//!
//! ```latex
//! \begin{texpp}
//! splice(kind=interface, path=rtl/adder.vhd, name=adder)
//! splice(kind=example, path=rtl/top.vhd, name=u0)
//! splice(path=rtl/adder.vhd, tags=("begin_note", "end_note"))
//!
//! let fast = query(kind=interface, path=rtl/fast_adder.vhd, name=adder)
//! if fast {
//!     splice(kind=interface, path=rtl/fast_adder.vhd, name=adder)
//! } else {
//!     splice(kind=interface, path=rtl/adder.vhd, name=adder)
//! }
//! \end{texpp}
//! ```
//!
//! Extraction failures never stop a run: they are rendered inline as
//! `\textbf{error}: ...` and weaving continues.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use texpp_core::TexppConfig;
//! use texpp_core::weave_file;
//!
//! let woven = weave_file("doc/manual.tex", &TexppConfig::default()).unwrap();
//! print!("{woven}");
//! ```

pub use config::*;
pub use document::*;
pub use error::*;
pub use executor::*;
pub use extract::*;
pub use language::*;
pub use output::*;
pub use parser::*;
pub use render::*;

pub mod config;
mod document;
mod error;
mod executor;
mod extract;
mod language;
pub(crate) mod lexer;
mod output;
mod parser;
mod render;
pub mod scanner;
pub(crate) mod source_lexer;
pub(crate) mod tokens;

#[cfg(test)]
mod __fixtures;
