use bigdecimal::BigDecimal;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use menuboard_core::{items_of, Id, MenuBoard, MenuItem, MenuItemUpdate, NewMenuItem, Upload};

use super::{confirm, truncate, OutputFormat, Reported};

#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand)]
pub enum ItemSubcommand {
    /// List menu items
    List {
        /// Only items of this restaurant
        #[arg(long, short)]
        restaurant: Option<Id>,

        /// Only items of this category
        #[arg(long)]
        category: Option<Id>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a menu item
    Create {
        /// Name of the item
        name: String,

        /// Price, e.g. 12.50
        #[arg(long, short)]
        price: BigDecimal,

        /// Category the item belongs to
        #[arg(long)]
        category: Id,

        /// Short description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a menu item
    Update {
        /// Item ID
        id: Id,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New price
        #[arg(long, short)]
        price: Option<BigDecimal>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Move to another category
        #[arg(long)]
        category: Option<Id>,

        /// Photo to upload
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// Delete a menu item
    Delete {
        /// Item ID
        id: Id,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl ItemCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        let items = &board.menu_items;

        match &self.command {
            ItemSubcommand::List {
                restaurant,
                category,
                format,
            } => {
                let loaded = match restaurant {
                    Some(_) => {
                        let (categories_ok, items_ok) =
                            futures::join!(board.categories.fetch_all(), items.fetch_all());
                        categories_ok && items_ok
                    }
                    None => items.fetch_all().await,
                };
                if !loaded {
                    return Err(Reported.into());
                }

                let mut shown: Vec<MenuItem> = match restaurant {
                    Some(id) => board.categories.read(|categories| {
                        items.read(|all| items_of(categories, all, *id).into_iter().cloned().collect())
                    }),
                    None => items.snapshot(),
                };
                if let Some(category) = category {
                    shown.retain(|item| item.category == *category);
                }

                if shown.is_empty() {
                    println!("No menu items found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&shown)?);
                    }
                    OutputFormat::Text => {
                        println!("{:<8}  {:<30}  {:>10}  CATEGORY", "ID", "NAME", "PRICE");
                        println!("{}", "-".repeat(70));
                        for item in &shown {
                            println!(
                                "{:<8}  {:<30}  {:>10}  {}",
                                item.id,
                                truncate(&item.name, 30),
                                format!("${}", item.price),
                                item.category
                            );
                        }
                        println!("\nTotal: {} item(s)", shown.len());
                    }
                }
                Ok(())
            }

            ItemSubcommand::Create {
                name,
                price,
                category,
                description,
            } => {
                if name.trim().is_empty() {
                    return Err("Item name cannot be empty".into());
                }
                check_price(price)?;

                let mut new = NewMenuItem::new(name.trim(), price.clone(), *category);
                if let Some(description) = description {
                    new = new.with_description(description);
                }

                let created = items.add(new).await.ok_or(Reported)?;
                println!(
                    "Created menu item {} (ID {}) at ${}",
                    created.name, created.id, created.price
                );
                Ok(())
            }

            ItemSubcommand::Update {
                id,
                name,
                price,
                description,
                category,
                image,
            } => {
                let current = items.fetch_one(*id).await.ok_or(Reported)?;
                let mut update = MenuItemUpdate::from(&current);

                if let Some(name) = name {
                    if name.trim().is_empty() {
                        return Err("Item name cannot be empty".into());
                    }
                    update.name = name.trim().to_string();
                }
                if let Some(price) = price {
                    check_price(price)?;
                    update.price = price.clone();
                }
                if let Some(description) = description {
                    update.description = description.clone();
                }
                if let Some(category) = category {
                    update.category = *category;
                }
                if let Some(path) = image {
                    let upload = Upload::from_path(path)
                        .map_err(|e| format!("Failed to read image '{}': {}", path.display(), e))?;
                    update.image = Some(upload);
                }

                let updated = items.modify(*id, update).await.ok_or(Reported)?;
                println!(
                    "Updated menu item {} (ID {}) at ${}",
                    updated.name, updated.id, updated.price
                );
                if let Some(image) = &updated.image {
                    println!("Image: {}", image);
                }
                Ok(())
            }

            ItemSubcommand::Delete { id, force } => {
                let item = items.fetch_one(*id).await.ok_or(Reported)?;

                if !force && !confirm(&format!("Delete menu item '{}'?", item.name))? {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                if !items.remove(*id).await {
                    return Err(Reported.into());
                }
                println!("Deleted menu item: {}", item.name);
                Ok(())
            }
        }
    }
}

fn check_price(price: &BigDecimal) -> Result<(), String> {
    if *price < BigDecimal::from(0) {
        return Err(format!("Price cannot be negative: {}", price));
    }
    Ok(())
}
