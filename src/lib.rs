pub mod config;
pub mod contact;
pub mod date;
pub mod dom;
pub mod emailjs;
pub mod navigation;
pub mod notifications;
pub mod particles;
pub mod projects;
pub mod reveal;
pub mod routes;
pub mod sections;
pub mod skills;
pub mod state;
pub mod stats;
pub mod throttle;
pub mod timing;
pub mod typing;
