//! KORE Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use kore::Category;
use kore_app::{
    auth::{AuthAdmin, Role},
    database::{self, Db},
    domain::menu::{
        MenuService, MenuServiceError, PgMenuService,
        models::NewMenuItem,
    },
};
use rust_decimal::dec;

#[derive(Debug, Parser)]
#[command(name = "kore-app", about = "KORE CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(UserCommand),
    Menu(MenuCommand),
}

#[derive(Debug, Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Grant the admin role to an existing account.
    Promote(PromoteArgs),
}

#[derive(Debug, Args)]
struct PromoteArgs {
    /// Email of the account to promote
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// Populate the menu with the starter catalog.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::User(UserCommand {
            command: UserSubcommand::Promote(args),
        }) => promote_user(args).await,
        Commands::Menu(MenuCommand {
            command: MenuSubcommand::Seed(args),
        }) => seed_menu(args).await,
    }
}

async fn promote_user(args: PromoteArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let admin = AuthAdmin::new(Db::new(pool));

    let user = admin
        .set_role(&args.email, Role::Admin)
        .await
        .map_err(|error| format!("failed to promote user: {error}"))?;

    println!("promoted {} ({}) to {}", user.email, user.uuid, user.role);

    Ok(())
}

async fn seed_menu(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let menu = PgMenuService::new(Db::new(pool));

    for item in starter_menu() {
        let name = item.name.clone();

        match menu.create(item).await {
            Ok(created) => println!("seeded: {} ({})", created.name, created.uuid),
            Err(MenuServiceError::AlreadyExists) => println!("skipped: {name}"),
            Err(error) => return Err(format!("failed to seed {name}: {error}")),
        }
    }

    println!("seeding complete");

    Ok(())
}

fn starter_menu() -> Vec<NewMenuItem> {
    fn dish(
        name: &str,
        price: rust_decimal::Decimal,
        category: Category,
        description: &str,
        is_vegetarian: bool,
    ) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            is_vegetarian,
            image_url: None,
        }
    }

    vec![
        dish(
            "Spring Rolls",
            dec!(8.99),
            Category::Appetizer,
            "Crispy vegetable spring rolls served with sweet chili sauce",
            true,
        ),
        dish(
            "Chicken Wings",
            dec!(12.99),
            Category::Appetizer,
            "Spicy buffalo wings with blue cheese dip",
            false,
        ),
        dish(
            "Bruschetta",
            dec!(9.99),
            Category::Appetizer,
            "Toasted bread topped with tomatoes, garlic, and basil",
            true,
        ),
        dish(
            "Grilled Salmon",
            dec!(24.99),
            Category::MainCourse,
            "Fresh Atlantic salmon with lemon butter sauce and vegetables",
            false,
        ),
        dish(
            "Beef Burger",
            dec!(16.99),
            Category::MainCourse,
            "Juicy beef patty with lettuce, tomato, and special sauce",
            false,
        ),
        dish(
            "Vegetable Pasta",
            dec!(18.99),
            Category::MainCourse,
            "Penne pasta with seasonal vegetables in creamy sauce",
            true,
        ),
        dish(
            "Chicken Curry",
            dec!(19.99),
            Category::MainCourse,
            "Spicy chicken curry with rice and naan bread",
            false,
        ),
        dish(
            "Caesar Salad",
            dec!(14.99),
            Category::MainCourse,
            "Fresh romaine lettuce with Caesar dressing and croutons",
            true,
        ),
        dish(
            "Chocolate Cake",
            dec!(8.99),
            Category::Dessert,
            "Rich chocolate layer cake with chocolate ganache",
            true,
        ),
        dish(
            "Cheesecake",
            dec!(9.99),
            Category::Dessert,
            "New York style cheesecake with berry compote",
            true,
        ),
        dish(
            "Ice Cream Sundae",
            dec!(7.99),
            Category::Dessert,
            "Vanilla ice cream with chocolate sauce and sprinkles",
            true,
        ),
        dish(
            "Fresh Orange Juice",
            dec!(4.99),
            Category::Beverage,
            "Freshly squeezed orange juice",
            true,
        ),
        dish(
            "Iced Coffee",
            dec!(5.99),
            Category::Beverage,
            "Cold brewed coffee with cream and sugar",
            true,
        ),
        dish(
            "Green Tea",
            dec!(3.99),
            Category::Beverage,
            "Premium green tea served hot",
            true,
        ),
        dish(
            "Smoothie",
            dec!(6.99),
            Category::Beverage,
            "Mixed berry smoothie with yogurt",
            true,
        ),
    ]
}
