pub mod fetch;
pub mod publish;
pub mod run;
