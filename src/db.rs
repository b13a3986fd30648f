use sqlx::SqlitePool;

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    // Foreign keys are critical - fail if this doesn't work
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    // auth
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            hashed_password TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    // posts
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // manuals hierarchy: categories -> groups -> manuals
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_name TEXT NOT NULL,
            logo_url TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS groups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            group_name TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY(category_id) REFERENCES categories(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS manuals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            file_url TEXT NOT NULL,
            cover_image_url TEXT NOT NULL,
            group_id INTEGER NOT NULL,
            FOREIGN KEY(group_id) REFERENCES groups(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // frequency-converter inventory:
    // mill_shops -> production_lines -> locations -> cabinets -> converters -> units
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS mill_shops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS production_lines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            mill_shop_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            FOREIGN KEY(mill_shop_id) REFERENCES mill_shops(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            production_line_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            FOREIGN KEY(production_line_id) REFERENCES production_lines(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS cabinets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            location_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            FOREIGN KEY(location_id) REFERENCES locations(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS converters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            cabinet_id INTEGER NOT NULL,
            brand TEXT NOT NULL,
            model TEXT NOT NULL,
            nominal_current REAL,
            current_type TEXT,
            power REAL,
            input_voltage REAL,
            output_voltage REAL,
            FOREIGN KEY(cabinet_id) REFERENCES cabinets(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS units (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            converter_id INTEGER NOT NULL,
            FOREIGN KEY(converter_id) REFERENCES converters(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // storage inventory
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS storage_locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            place TEXT,
            used_place TEXT,
            new_place TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS storage_equipment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            location_id INTEGER NOT NULL,
            grp TEXT NOT NULL,
            name TEXT,
            specs TEXT,
            qty INTEGER NOT NULL,
            install TEXT,
            number TEXT,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now')),
            FOREIGN KEY(location_id) REFERENCES storage_locations(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // site menu
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS menu (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            url TEXT NOT NULL DEFAULT '#'
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_users_email", "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)"),
        ("idx_posts_user", "CREATE INDEX IF NOT EXISTS idx_posts_user ON posts(user_id)"),
        ("idx_groups_category", "CREATE INDEX IF NOT EXISTS idx_groups_category ON groups(category_id)"),
        ("idx_manuals_group", "CREATE INDEX IF NOT EXISTS idx_manuals_group ON manuals(group_id)"),
        ("idx_manuals_title", "CREATE INDEX IF NOT EXISTS idx_manuals_title ON manuals(title)"),
        ("idx_lines_mill_shop", "CREATE INDEX IF NOT EXISTS idx_lines_mill_shop ON production_lines(mill_shop_id)"),
        ("idx_locations_line", "CREATE INDEX IF NOT EXISTS idx_locations_line ON locations(production_line_id)"),
        ("idx_cabinets_location", "CREATE INDEX IF NOT EXISTS idx_cabinets_location ON cabinets(location_id)"),
        ("idx_converters_cabinet", "CREATE INDEX IF NOT EXISTS idx_converters_cabinet ON converters(cabinet_id)"),
        ("idx_units_converter", "CREATE INDEX IF NOT EXISTS idx_units_converter ON units(converter_id)"),
        ("idx_equipment_location", "CREATE INDEX IF NOT EXISTS idx_equipment_location ON storage_equipment(location_id)"),
    ];

    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            match &e {
                sqlx::Error::Database(db_err) => {
                    let msg = db_err.message().to_lowercase();
                    if msg.contains("already exists") || msg.contains("duplicate") {
                        tracing::debug!("Index {} already exists, skipping", name);
                    } else {
                        tracing::warn!("Failed to create index {}: {}", name, e);
                    }
                }
                _ => {
                    tracing::warn!("Failed to create index {}: {}", name, e);
                }
            }
        }
    }

    Ok(())
}
