pub mod support;

mod output_contracts;
mod scenarios;
