use anyhow::{Context, Result};
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::warn;

use wd_core::ids::{OutfitId, UserId};
use wd_core::ports::OutfitRepositoryPort;
use wd_core::Outfit;

use crate::db::{models::OutfitRow, pool::DbPool, schema::t_outfit::dsl::*};

pub struct DieselOutfitRepository {
    pool: DbPool,
}

impl DieselOutfitRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutfitRepositoryPort for DieselOutfitRepository {
    async fn insert_outfit(&self, outfit: &Outfit) -> Result<()> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        let row = OutfitRow::from_domain(outfit)?;

        diesel::insert_into(t_outfit)
            .values(&row)
            .execute(&mut conn)
            .context("failed to insert outfit")?;

        Ok(())
    }

    async fn list_outfits_for_owner(&self, target_owner: &UserId) -> Result<Vec<Outfit>> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        let rows = t_outfit
            .filter(owner_id.eq(target_owner.as_str()))
            .order(created_at.desc())
            .load::<OutfitRow>(&mut conn)
            .context("failed to list outfits")?;

        let mut outfits = Vec::with_capacity(rows.len());
        for row in rows {
            let row_id = row.id.clone();
            match row.into_domain() {
                Ok(outfit) => outfits.push(outfit),
                Err(err) => {
                    warn!(outfit_id = %row_id, error = %err, "skipping undecodable outfit row");
                }
            }
        }
        Ok(outfits)
    }

    async fn delete_outfit(&self, outfit_id: &OutfitId) -> Result<()> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        diesel::delete(t_outfit.filter(id.eq(outfit_id.as_str())))
            .execute(&mut conn)
            .context("failed to delete outfit")?;

        Ok(())
    }
}
