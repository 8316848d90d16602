mod genre;
mod history;

pub use genre::GenreManager;
pub use history::HistoryManager;
pub use history::LoadError;
pub use history::LoadedFile;
pub use history::load_recently_played;
