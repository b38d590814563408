use std::{io, net::SocketAddr};

use thiserror::Error;

use crate::content::ContentError;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("invalid site content: {0}")]
    Content(#[from] ContentError),
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] io::Error),
}
