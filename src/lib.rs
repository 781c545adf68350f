pub mod api {
    pub mod server;
}
pub mod cli {
    pub mod repl;
}
pub mod directory {
    pub mod facts;
    pub mod regions;
}
pub mod enrich {
    pub mod cache;
    pub mod wikipedia;
}
pub mod resolve {
    pub mod resolver;
}
pub mod service {
    pub mod log_service;
    pub mod var_service;
}
