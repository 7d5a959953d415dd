pub mod export;
pub mod overview;
pub mod progression;
pub mod prs;
pub mod recent;
pub mod report;
pub mod session;
pub mod volume;
