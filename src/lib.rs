pub mod config;
pub mod drivers;
pub mod event_loop;
pub mod keybindings;
pub mod launcher;
pub mod runner;
pub mod screen;
pub mod session;
pub mod tabs;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
