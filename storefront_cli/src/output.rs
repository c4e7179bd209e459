use anyhow::Result;
use serde::Serialize;
use storefront_lib::types::{DetailItem, Item};
use storefront_lib::{Catalog, CapacityOption, HomePage, ProductView, Route};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a plain table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(skip)]
    #[serde(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Sellers")]
    #[serde(rename = "Sellers")]
    sellers: String,
    #[tabled(rename = "Followers")]
    #[serde(rename = "Followers")]
    followers: String,
    #[tabled(rename = "Link")]
    #[serde(rename = "Link")]
    link: String,
}

#[derive(Tabled, Serialize)]
struct OptionRow {
    #[tabled(rename = "Capacity")]
    #[serde(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Selected")]
    #[serde(rename = "Selected")]
    selected: String,
}

#[derive(Tabled, Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

/// What the root page shows after the carousel and list were set up.
#[derive(Debug, Serialize)]
pub struct HomeSnapshot {
    pub featured: Vec<Item>,
    pub active_index: usize,
    pub indicator: String,
    pub products: Vec<Item>,
    pub next_url: Option<String>,
}

impl HomeSnapshot {
    pub fn from_page<C: Catalog>(home: &HomePage<C>) -> Self {
        Self {
            featured: home.featured.clone(),
            active_index: home.carousel.active_index(),
            indicator: home.carousel.indicator(),
            products: home.listing.items(),
            next_url: home.listing.cursor(),
        }
    }

    fn active_featured(&self) -> Option<&Item> {
        self.featured.get(self.active_index)
    }
}

#[derive(Serialize)]
struct ProductJson<'a> {
    code: i64,
    detail: &'a DetailItem,
    stars: String,
    options: &'a [CapacityOption],
    selected_capacity: Option<u32>,
    displayed_price: f64,
    route: String,
}

// -- Row builders --

fn build_product_rows(items: &[Item], section: &'static str) -> Vec<ProductRow> {
    items
        .iter()
        .map(|item| ProductRow {
            section,
            code: item.code,
            name: item.name.clone(),
            price: format_price(item.price),
            discount: format!("%{}", item.drop_ratio),
            sellers: format!("{} satıcı", item.count_of_prices),
            followers: format!("{}+ takip", item.follow_count),
            link: Route::Product(item.code).path(),
        })
        .collect()
}

fn build_option_rows(view: &ProductView) -> Vec<OptionRow> {
    let selected = view.selected().map(|o| o.capacity);
    view.options()
        .iter()
        .map(|o| OptionRow {
            capacity: format!("{} GB", o.capacity),
            price: format_price(o.price),
            selected: if Some(o.capacity) == selected {
                "●".to_string()
            } else {
                String::new()
            },
        })
        .collect()
}

fn build_detail_rows(view: &ProductView) -> Vec<FieldRow> {
    let detail = view.detail();
    let mut rows = vec![
        FieldRow {
            field: "Brand",
            value: detail.mk_name.clone(),
        },
        FieldRow {
            field: "Name",
            value: detail.product_name.clone(),
        },
    ];
    if !detail.badge.is_empty() {
        rows.push(FieldRow {
            field: "Badge",
            value: detail.badge.clone(),
        });
    }
    rows.push(FieldRow {
        field: "Rating",
        value: view.stars(),
    });
    rows.push(FieldRow {
        field: "Sellers",
        value: format!("{} satıcı", detail.count_of_prices),
    });
    rows.push(FieldRow {
        field: "Price",
        value: format_price(view.displayed_price()),
    });
    if detail.free_shipping {
        rows.push(FieldRow {
            field: "Shipping",
            value: "Kargo bedava".to_string(),
        });
    }
    if !detail.last_update.is_empty() {
        rows.push(FieldRow {
            field: "Last update",
            value: detail.last_update.clone(),
        });
    }
    rows.push(FieldRow {
        field: "Link",
        value: view.route().path(),
    });
    rows
}

fn format_price(price: f64) -> String {
    format!("{} TL", price)
}

fn featured_heading(snapshot: &HomeSnapshot) -> String {
    if snapshot.featured.is_empty() {
        return "Featured: none".to_string();
    }
    format!(
        "Featured {}/{}  {}",
        snapshot.active_index + 1,
        snapshot.featured.len(),
        snapshot.indicator
    )
}

fn render<T: Tabled>(rows: Vec<T>, markdown: bool) -> String {
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn write_csv<T: Serialize, W: std::io::Write>(rows: &[T], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Printers --

pub fn print_home(snapshot: &HomeSnapshot, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(snapshot),
        OutputFormat::Csv => {
            let mut rows = build_product_rows(&snapshot.featured, "featured");
            rows.extend(build_product_rows(&snapshot.products, "listing"));
            write_csv(&rows, std::io::stdout())?;
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            let markdown = matches!(format, OutputFormat::Markdown);
            println!("{}", featured_heading(snapshot));
            if let Some(item) = snapshot.active_featured() {
                let card = build_product_rows(std::slice::from_ref(item), "featured");
                println!("{}", render(card, markdown));
            }
            println!();
            println!("Products");
            println!(
                "{}",
                render(build_product_rows(&snapshot.products, "listing"), markdown)
            );
        }
    }
    Ok(())
}

pub fn print_products(items: &[Item], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Csv => write_csv(&build_product_rows(items, "listing"), std::io::stdout())?,
        OutputFormat::Table => println!("{}", render(build_product_rows(items, "listing"), false)),
        OutputFormat::Markdown => {
            println!("{}", render(build_product_rows(items, "listing"), true))
        }
    }
    Ok(())
}

pub fn print_product(view: &ProductView, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&ProductJson {
            code: view.code(),
            detail: view.detail(),
            stars: view.stars(),
            options: view.options(),
            selected_capacity: view.selected().map(|o| o.capacity),
            displayed_price: view.displayed_price(),
            route: view.route().path(),
        }),
        OutputFormat::Csv => write_csv(&build_option_rows(view), std::io::stdout())?,
        OutputFormat::Table | OutputFormat::Markdown => {
            let markdown = matches!(format, OutputFormat::Markdown);
            println!("{}", render(build_detail_rows(view), markdown));
            if !view.options().is_empty() {
                println!();
                println!("{}", render(build_option_rows(view), markdown));
            }
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
