mod check;
mod list;
mod show;

pub use check::cmd_check_movie;
pub use list::cmd_list_movies;
pub use show::cmd_show_movie;
