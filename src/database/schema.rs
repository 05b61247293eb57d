//! Schema bootstrap for the bot database.
//!
//! Brings the `mergebot` database to the baseline state the bot expects:
//! four collections, each with a unique index on its `_id`. The sequence
//! is safe to re-run: a collection that already exists is skipped, and
//! re-creating an index with identical options is a server-side no-op.
//! Every other failure propagates from the driver untouched.

use anyhow::Result;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use tracing::{debug, info};

/// Logical database the bot stores everything in.
pub const DB_NAME: &str = "mergebot";

/// Collections the bot expects to exist.
pub const COLLECTIONS: [&str; 4] = ["users", "mergeSettings", "thumbnail", "rcloneData"];

/// Printed to stdout once the full sequence has completed.
const SUCCESS_MESSAGE: &str = "✅ MongoDB initialized successfully for MERGE-BOT";

/// Server error code for creating a collection that already exists.
const NAMESPACE_EXISTS: i32 = 48;

/// Bring the given database to its baseline schema state.
///
/// The operations are independent of each other; they run sequentially
/// and the success line is only printed after all of them completed.
pub async fn initialize(db: &mongodb::Database) -> Result<()> {
    info!("Ensuring collections exist...");
    for name in COLLECTIONS {
        ensure_collection(db, name).await?;
    }

    info!("Ensuring unique _id indexes...");
    for name in COLLECTIONS {
        ensure_unique_id_index(db, name).await?;
    }

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

/// Create the collection if it is not already present.
async fn ensure_collection(db: &mongodb::Database, name: &str) -> Result<()> {
    match db.create_collection(name).await {
        Ok(()) => info!("Collection '{}' created", name),
        Err(e) if is_namespace_exists(&e) => {
            debug!("Collection '{}' already exists", name);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Enforce uniqueness of the identifier field on the collection.
async fn ensure_unique_id_index(db: &mongodb::Database, name: &str) -> Result<()> {
    let collection = db.collection::<Document>(name);
    collection.create_index(unique_id_index()).await?;
    debug!("Unique _id index ensured on '{}'", name);
    Ok(())
}

/// Single-field ascending index on `_id` with a uniqueness constraint.
fn unique_id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "_id": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(&*err.kind, ErrorKind::Command(c) if c.code == NAMESPACE_EXISTS)
}
