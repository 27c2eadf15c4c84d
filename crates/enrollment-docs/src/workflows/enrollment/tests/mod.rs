mod common;
mod evaluation;
mod policy;
