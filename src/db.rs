#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::listing::{Listing, ListingInput, ListingWithReviews};
    use crate::models::review::{Review, ReviewInput};
    use chrono::Utc;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tracing::{debug, info};
    use uuid::Uuid;


    const LISTING_COLUMNS: &str = "id, title, description, image, price, location, country";

    // Handle to the entity store. Cheap to share behind `web::Data`.
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Open (or create) the database at `db_path`; ":memory:" for tests
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            info!(path = db_path, "Database connection established");
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            // 1. Listings table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS listings (
                    id TEXT PRIMARY KEY,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL,
                    image TEXT,
                    price REAL NOT NULL CHECK (price >= 0),
                    location TEXT NOT NULL,
                    country TEXT NOT NULL
                );",
            )?;

            // 2. Reviews table, no back-reference to the owning listing
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    comment TEXT NOT NULL,
                    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                    created_at TEXT NOT NULL
                );",
            )?;

            // 3. Ordered review references held by each listing
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS listing_reviews (
                    listing_id TEXT NOT NULL,
                    review_id TEXT NOT NULL UNIQUE,
                    position INTEGER NOT NULL,
                    PRIMARY KEY (listing_id, review_id),
                    FOREIGN KEY (listing_id) REFERENCES listings(id) ON DELETE CASCADE,
                    FOREIGN KEY (review_id) REFERENCES reviews(id) ON DELETE CASCADE
                );",
            )?;
            debug!("Database schema ready");
            Ok(())
        }

        // Retrieve all listings in insertion order
        pub async fn list_listings(&self) -> Result<Vec<Listing>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {LISTING_COLUMNS} FROM listings ORDER BY rowid"
            ))?;
            let mut listings = stmt
                .query_map([], listing_from_row)?
                .collect::<Result<Vec<_>, _>>()?;

            let mut refs = all_review_ids(&conn)?;
            for listing in &mut listings {
                listing.reviews = refs.remove(&listing.id).unwrap_or_default();
            }
            debug!("Fetched {} listings from the database", listings.len());
            Ok(listings)
        }

        pub async fn find_listing(&self, id: &str) -> Result<Option<Listing>, Error> {
            let conn = self.conn.lock().await;
            load_listing(&conn, id)
        }

        // Listing plus its reviews, in reference order
        pub async fn find_listing_with_reviews(
            &self,
            id: &str,
        ) -> Result<Option<ListingWithReviews>, Error> {
            let conn = self.conn.lock().await;
            let listing = match load_listing(&conn, id)? {
                Some(listing) => listing,
                None => return Ok(None),
            };

            let mut stmt = conn.prepare(
                "SELECT r.id, r.comment, r.rating, r.created_at
                 FROM listing_reviews lr
                 JOIN reviews r ON r.id = lr.review_id
                 WHERE lr.listing_id = ?
                 ORDER BY lr.position ASC",
            )?;
            let reviews = stmt
                .query_map([id], review_from_row)?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Some(ListingWithReviews { listing, reviews }))
        }

        // Insert a new listing; every call creates a fresh entity
        pub async fn insert_listing(&self, input: &ListingInput) -> Result<Listing, Error> {
            let conn = self.conn.lock().await;
            let id = Uuid::new_v4().to_string();
            insert_listing_row(&conn, &id, input)?;
            info!(listing_id = %id, "Listing created");

            Ok(Listing {
                id,
                title: input.title.clone(),
                description: input.description.clone(),
                image: input.image.clone(),
                price: input.price,
                location: input.location.clone(),
                country: input.country.clone(),
                reviews: Vec::new(),
            })
        }

        // Replace every field of an existing listing; None when it does not exist
        pub async fn update_listing(
            &self,
            id: &str,
            input: &ListingInput,
        ) -> Result<Option<Listing>, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE listings
                 SET title = ?1, description = ?2, image = ?3, price = ?4,
                     location = ?5, country = ?6
                 WHERE id = ?7",
                params![
                    &input.title,
                    &input.description,
                    &input.image,
                    input.price,
                    &input.location,
                    &input.country,
                    id
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            info!(listing_id = id, "Listing updated");
            load_listing(&conn, id)
        }

        // Delete a listing together with the reviews it owns
        pub async fn delete_listing(&self, id: &str) -> Result<bool, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let reviews = tx.execute(
                "DELETE FROM reviews WHERE id IN (
                    SELECT review_id FROM listing_reviews WHERE listing_id = ?
                )",
                [id],
            )?;
            tx.execute("DELETE FROM listing_reviews WHERE listing_id = ?", [id])?;
            let deleted = tx.execute("DELETE FROM listings WHERE id = ?", [id])? > 0;

            tx.commit()?;
            if deleted {
                info!(listing_id = id, reviews, "Listing deleted");
            }
            Ok(deleted)
        }

        // Create a review and append it to the listing's collection in one transaction
        pub async fn add_review(
            &self,
            listing_id: &str,
            input: &ReviewInput,
        ) -> Result<Option<Review>, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let exists = tx
                .query_row("SELECT 1 FROM listings WHERE id = ?", [listing_id], |_| Ok(()))
                .optional()?
                .is_some();
            if !exists {
                return Ok(None);
            }

            let review = Review {
                id: Uuid::new_v4().to_string(),
                comment: input.comment.clone(),
                rating: input.rating,
                created_at: Utc::now(),
            };
            tx.execute(
                "INSERT INTO reviews (id, comment, rating, created_at) VALUES (?, ?, ?, ?)",
                params![&review.id, &review.comment, review.rating, review.created_at],
            )?;

            let position: i64 = tx.query_row(
                "SELECT COALESCE(MAX(position), 0) + 1 FROM listing_reviews WHERE listing_id = ?",
                [listing_id],
                |row| row.get(0),
            )?;
            tx.execute(
                "INSERT INTO listing_reviews (listing_id, review_id, position) VALUES (?, ?, ?)",
                params![listing_id, &review.id, position],
            )?;

            tx.commit()?;
            info!(listing_id, review_id = %review.id, "Review created");
            Ok(Some(review))
        }

        // Unlink and delete a review; false when the listing does not own it
        pub async fn remove_review(&self, listing_id: &str, review_id: &str) -> Result<bool, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let unlinked = tx.execute(
                "DELETE FROM listing_reviews WHERE listing_id = ? AND review_id = ?",
                [listing_id, review_id],
            )?;
            if unlinked == 0 {
                return Ok(false);
            }
            tx.execute("DELETE FROM reviews WHERE id = ?", [review_id])?;

            tx.commit()?;
            info!(listing_id, review_id, "Review deleted");
            Ok(true)
        }

        pub async fn find_review(&self, id: &str) -> Result<Option<Review>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, comment, rating, created_at FROM reviews WHERE id = ?",
                [id],
                review_from_row,
            )
            .optional()
        }

        pub async fn count_listings(&self) -> Result<usize, Error> {
            let conn = self.conn.lock().await;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))?;
            Ok(count as usize)
        }

        pub async fn count_reviews(&self) -> Result<usize, Error> {
            let conn = self.conn.lock().await;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            Ok(count as usize)
        }

        // Wipe all listings and reviews, then insert `inputs`
        pub async fn replace_all_listings(&self, inputs: &[ListingInput]) -> Result<usize, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            tx.execute_batch(
                "DELETE FROM listing_reviews;
                 DELETE FROM reviews;
                 DELETE FROM listings;",
            )?;
            for input in inputs {
                insert_listing_row(&tx, &Uuid::new_v4().to_string(), input)?;
            }

            tx.commit()?;
            info!("Replaced all listings with {} entries", inputs.len());
            Ok(inputs.len())
        }
    }

    fn insert_listing_row(conn: &Connection, id: &str, input: &ListingInput) -> Result<(), Error> {
        conn.execute(
            "INSERT INTO listings (id, title, description, image, price, location, country)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                id,
                &input.title,
                &input.description,
                &input.image,
                input.price,
                &input.location,
                &input.country
            ],
        )?;
        Ok(())
    }

    fn load_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, Error> {
        let listing = conn
            .query_row(
                &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?"),
                [id],
                listing_from_row,
            )
            .optional()?;

        match listing {
            Some(mut listing) => {
                let mut stmt = conn.prepare(
                    "SELECT review_id FROM listing_reviews
                     WHERE listing_id = ?
                     ORDER BY position ASC",
                )?;
                listing.reviews = stmt
                    .query_map([id], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(Some(listing))
            }
            None => Ok(None),
        }
    }

    fn all_review_ids(conn: &Connection) -> Result<HashMap<String, Vec<String>>, Error> {
        let mut stmt = conn.prepare(
            "SELECT listing_id, review_id FROM listing_reviews
             ORDER BY listing_id, position ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut refs: HashMap<String, Vec<String>> = HashMap::new();
        for row in rows {
            let (listing_id, review_id) = row?;
            refs.entry(listing_id).or_default().push(review_id);
        }
        Ok(refs)
    }

    fn listing_from_row(row: &Row<'_>) -> Result<Listing, Error> {
        Ok(Listing {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            image: row.get(3)?,
            price: row.get(4)?,
            location: row.get(5)?,
            country: row.get(6)?,
            reviews: Vec::new(),
        })
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            id: row.get(0)?,
            comment: row.get(1)?,
            rating: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
