//! Show movie command handler

use crate::api::format_currency;
use crate::config::Config;
use crate::db::Store;

pub async fn cmd_show_movie(config: &Config, id: i32) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    let Some(movie) = store.get_movie(id).await? else {
        println!("Movie {} not found. Use 'movieshelf list' to see IDs", id);
        return Ok(());
    };

    println!("{}", movie.title);
    println!("{:-<60}", "");
    println!("ID:           {}", movie.id);
    println!("Released:     {}", movie.release_date);
    println!("Genre:        {}", movie.genre);
    println!("Price:        {}", format_currency(movie.price));
    println!("Rating:       {}", movie.rating.as_deref().unwrap_or("-"));
    if let Some(audience) = &movie.audience {
        println!("Audience:     {}", audience);
    }
    println!();
    println!("{}", movie.description);

    if !movie.reviews.is_empty() {
        println!();
        println!("Ratings:");
        for review in &movie.reviews {
            println!("  #{} {}", review.id, review.rating);
        }
    }

    Ok(())
}
