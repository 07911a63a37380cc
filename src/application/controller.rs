// src/application/controller.rs
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, error, info, instrument};

use crate::application::api::{decode, ApiClient, Method, Transport};
use crate::application::list_view::{ListView, Row};
use crate::application::notifier::Notifier;
use crate::application::resource::Resource;
use crate::domain::{DomainError, EntityId};

/// Pairs one resource's list screen with its CRUD calls.
///
/// Every successful mutation is followed by a full reload of the list; a
/// failed one is reported through the notifier and nothing is reloaded.
pub struct ResourceController<R: Resource, T: Transport> {
    api: ApiClient<T>,
    notifier: Box<dyn Notifier>,
    view: ListView,
    entities: Vec<R::Entity>,
    _resource: PhantomData<R>,
}

impl<R: Resource, T: Transport> ResourceController<R, T> {
    pub fn new(api: ApiClient<T>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            view: ListView::new(R::KIND),
            entities: vec![],
            _resource: PhantomData,
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Entities behind the current view, in server order
    pub fn entities(&self) -> &[R::Entity] {
        &self.entities
    }

    /// Fetch the whole collection and re-render the view
    #[instrument(level = "debug", skip(self), fields(kind = R::KIND))]
    pub fn load_all(&mut self) -> Result<&ListView, DomainError> {
        match self.api.fetch::<Vec<R::Entity>>(&R::list_path()) {
            Ok(entities) => {
                self.view.replace(entities.iter().map(R::row));
                self.entities = entities;
                debug!(count = self.entities.len(), "Rendered list");
                Ok(&self.view)
            }
            Err(e) => {
                error!(kind = R::KIND, error = %e, "Failed to load list");
                Err(self.report(e))
            }
        }
    }

    /// POST a new entity, then reload.
    ///
    /// Returns the created entity when the server echoes one back.
    pub fn create(&mut self, draft: &R::Draft) -> Result<Option<R::Entity>, DomainError> {
        let body = self.encode(draft)?;
        let done = format!("Created {} '{}'", R::SINGULAR, R::draft_label(draft));
        let response = self.mutate(Method::Post, R::COLLECTION, Some(body), &done)?;
        Ok(Self::decode_entity(response))
    }

    /// DELETE by id, then reload
    pub fn remove(&mut self, id: &EntityId) -> Result<(), DomainError> {
        let done = format!("Deleted {} {}", R::SINGULAR, id);
        self.mutate(Method::Delete, &R::item_path(id), None, &done)?;
        Ok(())
    }

    /// PUT a replacement for `id`, then reload
    pub fn update(
        &mut self,
        id: &EntityId,
        draft: &R::Draft,
    ) -> Result<Option<R::Entity>, DomainError> {
        let body = self.encode(draft)?;
        let done = format!("Updated {} {}", R::SINGULAR, id);
        let response = self.mutate(Method::Put, &R::item_path(id), Some(body), &done)?;
        Ok(Self::decode_entity(response))
    }

    /// Fetch a single entity; the view is left untouched
    pub fn show(&mut self, id: &EntityId) -> Result<R::Entity, DomainError> {
        self.api
            .fetch(&R::item_path(id))
            .map_err(|e| self.report(e))
    }

    /// Fire the delete control of the row at `index` in the current view
    pub fn activate_delete(&mut self, index: usize) -> Result<(), DomainError> {
        let id = self
            .view
            .rows()
            .get(index)
            .and_then(Row::id)
            .cloned();
        match id {
            Some(id) => self.remove(&id),
            None => Err(self.report(DomainError::RequestFailed(format!(
                "No deletable {} at row {}",
                R::SINGULAR,
                index
            )))),
        }
    }

    pub(crate) fn mutate(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
        done: &str,
    ) -> Result<Option<Value>, DomainError> {
        let response = self
            .api
            .request(method, path, body)
            .map_err(|e| self.report(e))?;
        info!(%method, path, "{}", done);
        self.notifier.success(done);
        self.load_all()?;
        Ok(response)
    }

    pub(crate) fn report(&self, e: DomainError) -> DomainError {
        self.notifier.failure(&e.to_string());
        e
    }

    fn encode<B: Serialize>(&self, body: &B) -> Result<Value, DomainError> {
        serde_json::to_value(body).map_err(|e| {
            self.report(DomainError::RequestFailed(format!(
                "Failed to encode {}: {}",
                R::SINGULAR,
                e
            )))
        })
    }

    // The mutation already succeeded, so an odd echo is not an error
    fn decode_entity(response: Option<Value>) -> Option<R::Entity> {
        let value = response?;
        match decode(Method::Get, R::COLLECTION, value) {
            Ok(entity) => Some(entity),
            Err(e) => {
                debug!(error = %e, "Ignoring undecodable echo");
                None
            }
        }
    }
}
