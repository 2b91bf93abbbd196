pub mod pointer;

pub use pointer::{InputWiring, ListenerSet};
