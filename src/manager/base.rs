use super::{LabelManager, MarkLabelOptions};
use crate::association::{AssociationId, AssociationStore, NewResourceLabel};
use crate::error::LabelError;
use crate::label::{Label, LabelCatalog, LabelId};
use crate::resource::{resolve, ResourceKey};
use crate::validation::{AssociationValidator, ProjectContext};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Manager over a label catalog and an association store
#[derive(Debug)]
pub struct BaseManager<C, S> {
    catalog: Arc<C>,
    store: Arc<S>,
    validator: AssociationValidator<C>,
}

impl<C, S> Clone for BaseManager<C, S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            store: Arc::clone(&self.store),
            validator: self.validator.clone(),
        }
    }
}

impl<C: LabelCatalog, S: AssociationStore> BaseManager<C, S> {
    pub fn new(catalog: Arc<C>, store: Arc<S>) -> Self {
        let validator = AssociationValidator::new(Arc::clone(&catalog));
        Self {
            catalog,
            store,
            validator,
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

#[async_trait]
impl<C: LabelCatalog, S: AssociationStore> LabelManager for BaseManager<C, S> {
    #[instrument(skip(self), err(level = "debug"))]
    async fn get_labels_of_resource(
        &self,
        resource_type: &str,
        resource_key: ResourceKey,
    ) -> Result<Vec<Label>, LabelError> {
        let resource = resolve(resource_type, resource_key)?;
        let associations = self.store.list(&resource).await?;

        let ids: Vec<LabelId> = associations.iter().map(|a| a.label_id).collect();
        let mut found = self.catalog.lookup_many(&ids).await?;

        let mut labels = Vec::with_capacity(associations.len());
        for association in associations {
            match found.remove(&association.label_id) {
                Some(label) if !label.deleted => labels.push(label),
                _ => warn!(
                    association_id = %association.id,
                    label_id = %association.label_id,
                    %resource,
                    "skipping association to a label missing from the catalog"
                ),
            }
        }

        debug!(%resource, count = labels.len(), "listed labels of resource");
        Ok(labels)
    }

    #[instrument(skip(self), err(level = "debug"))]
    async fn mark_label_to_resource(
        &self,
        options: MarkLabelOptions,
    ) -> Result<AssociationId, LabelError> {
        let label_id = LabelId::parse(options.label_id)?;
        let resource = resolve(&options.resource_type, options.resource_key)?;
        self.validator.validate(options.label_id, options.project).await?;

        if self.store.find(&resource, label_id).await?.is_some() {
            return Err(LabelError::AlreadyMarked { label_id, resource });
        }

        // A racing mark of the same pair surfaces here as a store duplicate,
        // which converts to AlreadyMarked as well.
        let id = self
            .store
            .insert(NewResourceLabel::new(resource.clone(), label_id))
            .await?;

        info!(association_id = %id, %label_id, %resource, "marked label to resource");
        Ok(id)
    }

    #[instrument(skip(self), err(level = "debug"))]
    async fn remove_label_from_resource(
        &self,
        resource_type: &str,
        resource_key: ResourceKey,
        label_id: i64,
    ) -> Result<(), LabelError> {
        let resource = resolve(resource_type, resource_key)?;
        let label_id = LabelId::parse(label_id)?;

        if !self.store.delete(&resource, label_id).await? {
            return Err(LabelError::AssociationNotFound { label_id, resource });
        }

        info!(%label_id, %resource, "removed label from resource");
        Ok(())
    }

    #[instrument(skip(self), err(level = "debug"))]
    async fn validate(&self, label_id: i64, project: ProjectContext) -> Result<Label, LabelError> {
        let label = self.validator.validate(label_id, project).await?;
        debug!(label_id = %label.id, ?project, "label is usable");
        Ok(label)
    }

    #[instrument(skip(self))]
    async fn exists(&self, label_id: i64) -> Option<Label> {
        match self.validator.exists(label_id).await {
            Ok(label) => Some(label),
            Err(e) => {
                debug!(label_id, error = %e, "label treated as absent");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
