mod about;
pub use about::About;

mod contacts;
pub use contacts::Contacts;

mod footer;
pub use footer::Footer;

mod hero;
pub use hero::Hero;

mod portfolio;
pub use portfolio::{toggle_language, Portfolio, PortfolioProps};

mod projects;
pub use projects::Projects;
