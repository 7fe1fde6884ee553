//! List movies command handler

use crate::api::format_currency;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_movies(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let movies = store.list_movies().await?;

    if movies.is_empty() {
        println!("No movies stored.");
        println!();
        println!("Start the server with: movieshelf serve");
        return Ok(());
    }

    println!("Movies ({} total)", movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        let rating = movie.rating.as_deref().unwrap_or("-");
        println!(
            "[{}] {} ({}) {}",
            movie.id,
            movie.title,
            movie.release_date,
            format_currency(movie.price)
        );
        println!(
            "  Genre: {} | Rating: {} | Reviews: {}",
            movie.genre,
            rating,
            movie.reviews.len()
        );
    }

    Ok(())
}
