mod onlive_service;

pub use onlive_service::OnliveService;
