//! Link/unlink orchestration over the host/template linkage relation.
//!
//! `link` runs a fixed validation sequence inside one transaction:
//! permission check, duplicate-input check, per-target item-key and
//! application-name collision checks, common-template computation,
//! trigger-dependency cross-template check, skip-existing insert,
//! unlinked-referenced-template check, and finally cycle/double-linkage
//! detection over the entire relation. The first failure returns before
//! `commit`, so the dropped transaction rolls back everything written
//! since the operation began.
//!
//! `unlink` needs no validation: removing edges cannot introduce a
//! cycle, a double linkage, or a collision.

use std::collections::HashSet;

use hostlink_core::error::CoreError;
use hostlink_core::linkage::{
    check_circular_and_double_linkage, check_duplicate_template_ids, common_sources, LinkageEdge,
    LinkageGraph,
};
use hostlink_core::types::DbId;
use sqlx::PgPool;

use crate::access::TemplateAccess;
use crate::error::LinkageResult;
use crate::models::linkage::HostTemplateLink;
use crate::notify::Notifier;
use crate::repositories::{
    ApplicationRepo, HostRepo, ItemRepo, LinkageRepo, PgTx, TemplateRepo, TriggerRepo,
};

const NO_PERMISSIONS: &str = "No permissions to referred object or it does not exist!";

/// Orchestrates template link and unlink operations.
pub struct TemplateLinker<'a> {
    pool: &'a PgPool,
    access: &'a dyn TemplateAccess,
    notifier: &'a dyn Notifier,
}

impl<'a> TemplateLinker<'a> {
    pub fn new(
        pool: &'a PgPool,
        access: &'a dyn TemplateAccess,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            pool,
            access,
            notifier,
        }
    }

    /// Link the given templates to the given targets.
    ///
    /// An empty template set is a no-op. Pairs that already exist are
    /// skipped, so re-linking is idempotent. Every validation failure
    /// aborts the whole operation; nothing is persisted unless all
    /// checks pass.
    pub async fn link(&self, template_ids: &[DbId], target_ids: &[DbId]) -> LinkageResult<()> {
        if template_ids.is_empty() {
            return Ok(());
        }

        if !self.access.is_readable(template_ids).await? {
            return Err(CoreError::Permissions(NO_PERMISSIONS.to_string()).into());
        }

        check_duplicate_template_ids(template_ids)?;

        let mut tx = self.pool.begin().await?;

        self.check_collisions(&mut tx, template_ids, target_ids)
            .await?;

        // Templates linked to every target, plus the requested ones:
        // the common template set the dependency check validates
        // against.
        let common = self
            .common_template_set(&mut tx, template_ids, target_ids)
            .await?;

        self.check_trigger_dependencies(&mut tx, template_ids, &common)
            .await?;

        let inserted = self
            .insert_missing_pairs(&mut tx, template_ids, target_ids)
            .await?;

        // The remaining checks inspect the provisionally linked state,
        // which is only visible inside this transaction.
        if let Some(unlinked) =
            TriggerRepo::find_unlinked_referenced_template(&mut tx, target_ids, template_ids)
                .await?
        {
            return Err(CoreError::Parameters(format!(
                "Trigger has items from template \"{unlinked}\" that is not linked to host."
            ))
            .into());
        }

        let rows = LinkageRepo::all_edges(&mut tx).await?;
        let graph = LinkageGraph::from_edges(&to_edges(&rows));
        check_circular_and_double_linkage(&graph)?;

        tx.commit().await?;

        tracing::debug!(
            templates = ?template_ids,
            targets = ?target_ids,
            inserted,
            "templates linked"
        );
        Ok(())
    }

    /// Unlink the given templates.
    ///
    /// With a target set, only rows for those targets are removed; with
    /// none, the templates are removed from every host they are linked
    /// to. Emits an informational notice naming the affected templates
    /// and hosts when any rows existed.
    pub async fn unlink(
        &self,
        template_ids: &[DbId],
        target_ids: Option<&[DbId]>,
    ) -> LinkageResult<()> {
        if template_ids.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        // Names are resolved before the delete, without permission
        // filtering, so the notice can still name every affected row.
        let hosts = match target_ids {
            Some(targets) => HostRepo::names_by_ids(&mut tx, targets).await?,
            None => HostRepo::names_by_template_ids(&mut tx, template_ids).await?,
        };
        let templates = HostRepo::names_by_ids(&mut tx, template_ids).await?;

        let removed = LinkageRepo::delete(&mut tx, template_ids, target_ids).await?;

        tx.commit().await?;

        if removed > 0 && !hosts.is_empty() {
            self.notifier.info(&format!(
                "Templates \"{}\" unlinked from hosts \"{}\".",
                templates.join(", "),
                hosts.join(", ")
            ));
        }
        Ok(())
    }

    /// For every target, probe the union of the target itself, the
    /// requested templates and the already linked templates for
    /// item-key and application-name collisions.
    async fn check_collisions(
        &self,
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
        target_ids: &[DbId],
    ) -> LinkageResult<()> {
        for &target_id in target_ids {
            let linked = TemplateRepo::linked_template_ids(tx, target_id).await?;
            let mut union: Vec<DbId> = Vec::with_capacity(template_ids.len() + linked.len() + 1);
            union.push(target_id);
            union.extend_from_slice(template_ids);
            union.extend(linked);

            if let Some(duplicate) = ItemRepo::find_duplicate_key(tx, &union).await? {
                return Err(CoreError::Parameters(format!(
                    "Template with item key \"{}\" already linked to host.",
                    duplicate.key
                ))
                .into());
            }

            if let Some(duplicate) = ApplicationRepo::find_duplicate_name(tx, &union).await? {
                return Err(CoreError::Parameters(format!(
                    "Template with application \"{}\" already linked to host.",
                    duplicate.name
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Templates linked to all targets, unioned with the requested IDs.
    async fn common_template_set(
        &self,
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
        target_ids: &[DbId],
    ) -> LinkageResult<Vec<DbId>> {
        let rows = LinkageRepo::edges_for_targets(tx, target_ids).await?;
        let mut common = common_sources(&to_edges(&rows), target_ids);
        common.extend_from_slice(template_ids);
        common.sort_unstable();
        common.dedup();
        Ok(common)
    }

    /// Fail when a requested template's trigger depends on a trigger
    /// owned by a template outside the common template set.
    async fn check_trigger_dependencies(
        &self,
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
        common: &[DbId],
    ) -> LinkageResult<()> {
        for &template_id in template_ids {
            let trigger_ids = TriggerRepo::trigger_ids_for_host(tx, template_id).await?;
            if trigger_ids.is_empty() {
                continue;
            }

            if let Some(dependency_owner) =
                TriggerRepo::find_dependency_outside(tx, &trigger_ids, common).await?
            {
                let template = HostRepo::name_by_id(tx, template_id)
                    .await?
                    .unwrap_or_else(|| template_id.to_string());
                return Err(CoreError::Parameters(format!(
                    "Trigger in template \"{template}\" has dependency with trigger in \
                     template \"{dependency_owner}\"."
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Insert the cross product of targets and templates, skipping
    /// pairs already persisted. Returns how many rows were written.
    async fn insert_missing_pairs(
        &self,
        tx: &mut PgTx<'_>,
        template_ids: &[DbId],
        target_ids: &[DbId],
    ) -> LinkageResult<usize> {
        let existing: HashSet<(DbId, DbId)> =
            LinkageRepo::existing_pairs(tx, target_ids, template_ids)
                .await?
                .into_iter()
                .map(|row| (row.host_id, row.template_id))
                .collect();

        let mut pairs: Vec<(DbId, DbId)> = Vec::new();
        for &target_id in target_ids {
            for &template_id in template_ids {
                if !existing.contains(&(target_id, template_id)) {
                    pairs.push((target_id, template_id));
                }
            }
        }

        LinkageRepo::insert_pairs(tx, &pairs).await?;
        Ok(pairs.len())
    }
}

fn to_edges(rows: &[HostTemplateLink]) -> Vec<LinkageEdge> {
    rows.iter()
        .map(|row| LinkageEdge::new(row.host_id, row.template_id))
        .collect()
}
