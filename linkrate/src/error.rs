use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkRateError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("division by zero computing '{0}'")]
    DivisionByZero(&'static str),
}
