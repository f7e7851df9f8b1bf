use clap::Args;

use menuboard_core::{categories_of, Id, MenuBoard};

use super::{OutputFormat, Reported};

/// Read-only public menu, as a guest would see it.
#[derive(Args)]
pub struct MenuCommand {
    /// Restaurant ID
    restaurant: Id,

    /// Only show this category
    #[arg(long)]
    category: Option<Id>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl MenuCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        let restaurant = board
            .load_storefront(self.restaurant)
            .await
            .ok_or(Reported)?;
        let menu = board.menu(Some(restaurant.id), self.category);

        match self.format {
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "restaurant": restaurant,
                    "menu": menu,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                print!("{}", restaurant);
                println!();

                let names: Vec<String> = board.categories.read(|all| {
                    categories_of(all, restaurant.id)
                        .into_iter()
                        .map(|c| format!("[{}] {}", c.icon(), c.name))
                        .collect()
                });
                if !names.is_empty() {
                    println!("Categories: {}", names.join(" | "));
                    println!();
                }

                print!("{}", menu);
            }
        }
        Ok(())
    }
}
