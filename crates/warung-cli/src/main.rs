use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use warung_client::api::{AuthApi, CartApi, CategoryApi, MenuApi, OrderApi};
use warung_client::models::auth::LoginRequest;
use warung_client::models::menu::MenuFilter;
use warung_client::models::order::OrderStatus;
use warung_client::models::{Cart, Menu, Order};
use warung_client::{ApiClient, SessionStore, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "warung",
    version,
    about = "Klien CLI untuk API pemesanan warung UMKM"
)]
struct Cli {
    /// Email akun (dibutuhkan perintah yang memerlukan login)
    #[arg(long, env = "WARUNG_EMAIL", global = true)]
    email: Option<String>,

    /// Password akun
    #[arg(long, env = "WARUNG_PASSWORD", global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Daftar akun baru
    Register {
        /// Nama lengkap
        name: String,
        #[arg(value_name = "EMAIL")]
        register_email: String,
        #[arg(value_name = "PASSWORD")]
        register_password: String,
        /// Nomor telepon (opsional)
        #[arg(long)]
        phone: Option<String>,
    },
    /// Tampilkan profil user yang login
    Profile,
    /// Daftar semua kategori
    Categories,
    /// Daftar menu, dengan filter opsional
    Menus {
        #[arg(long)]
        category: Option<i32>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        available: Option<bool>,
    },
    /// Detail satu menu
    Menu { id: i32 },
    /// Tampilkan isi keranjang
    Cart,
    /// Tambah item ke keranjang
    CartAdd {
        menu_id: i32,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    /// Hapus item dari keranjang
    CartRemove { menu_id: i32 },
    /// Kosongkan keranjang
    CartClear,
    /// Buat order dari keranjang
    Checkout { address: String },
    /// Daftar order
    Orders {
        /// Semua order (admin)
        #[arg(long)]
        all: bool,
        /// Filter status (PENDING/PROCESSING/COMPLETED/CANCELLED)
        #[arg(long)]
        status: Option<String>,
    },
    /// Detail satu order
    Order { id: i32 },
    /// Update status order (admin)
    OrderStatus { order_number: String, status: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    let session = SessionStore::new();
    let client = ApiClient::new(&settings.api, session)?;

    let auth = AuthApi::new(client.clone());
    let categories = CategoryApi::new(client.clone());
    let menus = MenuApi::new(client.clone());
    let cart = CartApi::new(client.clone());
    let orders = OrderApi::new(client);

    match cli.command {
        Command::Register { name, register_email, register_password, phone } => {
            let user = auth
                .register(&warung_client::models::auth::RegisterRequest {
                    name,
                    email: register_email,
                    phone,
                    password: register_password.clone(),
                    confirm_password: register_password,
                })
                .await?;
            println!("Terdaftar sebagai {} <{}>", user.name, user.email);
        }
        Command::Profile => {
            login(&auth, &cli).await?;
            let user = auth.profile().await?;
            println!("{} <{}>", user.name, user.email);
            println!("Role : {}", user.role);
            if let Some(phone) = &user.phone {
                println!("Telp : {phone}");
            }
            auth.logout().await?;
        }
        Command::Categories => {
            login(&auth, &cli).await?;
            for category in categories.list().await? {
                let description = category.description.as_deref().unwrap_or("-");
                println!("{:>4}  {}  ({description})", category.id, category.name);
            }
            auth.logout().await?;
        }
        Command::Menus { category, ref search, available } => {
            login(&auth, &cli).await?;
            let filter =
                MenuFilter { category_id: category, is_available: available, search: search.clone() };
            for menu in menus.list(&filter).await? {
                print_menu_line(&menu);
            }
            auth.logout().await?;
        }
        Command::Menu { id } => {
            login(&auth, &cli).await?;
            let menu = menus.get(id).await?;
            print_menu_line(&menu);
            if let Some(description) = &menu.description {
                println!("      {description}");
            }
            auth.logout().await?;
        }
        Command::Cart => {
            login(&auth, &cli).await?;
            print_cart(&cart.get().await?);
            auth.logout().await?;
        }
        Command::CartAdd { menu_id, quantity } => {
            login(&auth, &cli).await?;
            let updated = cart.add_item(menu_id, quantity).await?;
            println!("{quantity} item ditambahkan ke keranjang");
            print_cart(&updated);
            auth.logout().await?;
        }
        Command::CartRemove { menu_id } => {
            login(&auth, &cli).await?;
            let updated = cart.remove_item(menu_id).await?;
            println!("Item dihapus");
            print_cart(&updated);
            auth.logout().await?;
        }
        Command::CartClear => {
            login(&auth, &cli).await?;
            cart.clear().await?;
            println!("Keranjang dikosongkan");
            auth.logout().await?;
        }
        Command::Checkout { ref address } => {
            login(&auth, &cli).await?;
            let order = orders.create(&address).await?;
            println!("Order berhasil dibuat!");
            print_order(&order);
            auth.logout().await?;
        }
        Command::Orders { all, ref status } => {
            login(&auth, &cli).await?;
            let filter = status.as_deref().map(parse_status).transpose()?;
            let mut list = if all { orders.list_all().await? } else { orders.list_mine().await? };
            if let Some(status) = filter {
                list.retain(|order| order.status == status);
            }
            for order in &list {
                println!(
                    "{}  {:<12}  Rp{:.0}  {}",
                    order.order_number,
                    order.status.display_name(),
                    order.total_price,
                    order.created_at
                );
            }
            auth.logout().await?;
        }
        Command::Order { id } => {
            login(&auth, &cli).await?;
            print_order(&orders.get(id).await?);
            auth.logout().await?;
        }
        Command::OrderStatus { ref order_number, ref status } => {
            login(&auth, &cli).await?;
            let next = parse_status(&status)?;
            let order = orders.update_status(&order_number, next).await?;
            println!("Status order berhasil diupdate");
            print_order(&order);
            auth.logout().await?;
        }
    }

    Ok(())
}

/// The session store is memory-only, so every invocation logs in fresh.
async fn login(auth: &AuthApi, cli: &Cli) -> Result<()> {
    let email = cli
        .email
        .clone()
        .context("--email atau WARUNG_EMAIL dibutuhkan untuk perintah ini")?;
    let password = cli
        .password
        .clone()
        .context("--password atau WARUNG_PASSWORD dibutuhkan untuk perintah ini")?;

    let user = auth.login(&LoginRequest { email, password }).await?;
    info!(user = %user.email, role = %user.role, "login berhasil");
    Ok(())
}

fn parse_status(value: &str) -> Result<OrderStatus> {
    match value.to_uppercase().as_str() {
        "PENDING" => Ok(OrderStatus::Pending),
        "PROCESSING" => Ok(OrderStatus::Processing),
        "COMPLETED" => Ok(OrderStatus::Completed),
        "CANCELLED" => Ok(OrderStatus::Cancelled),
        other => bail!("Status tidak dikenal: {other}"),
    }
}

fn print_menu_line(menu: &Menu) {
    let availability = if menu.is_available { "" } else { "  [habis]" };
    println!(
        "{:>4}  {:<30}  Rp{:.0}  [{}]{availability}",
        menu.id, menu.name, menu.price, menu.category.name
    );
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Keranjang kosong");
        return;
    }
    for item in &cart.items {
        println!(
            "{:>3}x  {:<30}  Rp{:.0}",
            item.quantity, item.menu.name, item.subtotal
        );
    }
    println!("Total: {} item, Rp{:.0}", cart.total_quantity, cart.total_price);
}

fn print_order(order: &Order) {
    println!("Order   : {}", order.order_number);
    println!("Status  : {}", order.status.display_name());
    println!("Alamat  : {}", order.address);
    for item in &order.items {
        println!(
            "  {:>3}x  {:<30}  Rp{:.0}",
            item.quantity, item.menu.name, item.subtotal
        );
    }
    println!("Total   : Rp{:.0}", order.total_price);
}
