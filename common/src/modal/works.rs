use std::collections::BTreeSet;

use crate::model::work::Work;

/// Project list shown in the modal, with per-item delete bookkeeping and
/// the add-project upload.
///
/// Deletions of different items may overlap; a second delete of an item
/// whose request is still in flight is refused. Only one upload runs at a
/// time, and it outlives the form that started it.
#[derive(Debug, Default)]
pub struct ModalWorks {
    works: Vec<Work>,
    pending: BTreeSet<u32>,
    creating: bool,
}

impl ModalWorks {
    pub fn replace(&mut self, works: Vec<Work>) {
        self.works = works;
        self.pending.retain(|id| self.works.iter().any(|w| w.id == *id));
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains(&id)
    }

    /// Marks `id` as being deleted. Returns `false` if it is unknown or
    /// already in flight.
    pub fn begin_delete(&mut self, id: u32) -> bool {
        if !self.works.iter().any(|w| w.id == id) {
            return false;
        }
        self.pending.insert(id)
    }

    /// Drops the item after a successful delete; the others keep their order.
    pub fn complete_delete(&mut self, id: u32) {
        self.pending.remove(&id);
        self.works.retain(|w| w.id != id);
    }

    /// Re-enables the item after a failed delete.
    pub fn abort_delete(&mut self, id: u32) {
        self.pending.remove(&id);
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// Marks an upload as started. Returns `false` if one is already running.
    pub fn begin_create(&mut self) -> bool {
        !std::mem::replace(&mut self.creating, true)
    }

    /// Ends the running upload, whatever its outcome.
    pub fn finish_create(&mut self) {
        self.creating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[u32]) -> ModalWorks {
        let mut works = ModalWorks::default();
        works.replace(
            ids.iter()
                .map(|&id| Work {
                    id,
                    title: format!("Projet {id}"),
                    image_url: format!("/images/{id}.jpg"),
                    category_id: 1,
                })
                .collect(),
        );
        works
    }

    fn ids(works: &ModalWorks) -> Vec<u32> {
        works.works().iter().map(|w| w.id).collect()
    }

    #[test]
    fn delete_removes_exactly_one_card_and_keeps_order() {
        let mut works = list(&[4, 8, 15, 16, 23]);

        assert!(works.begin_delete(15));
        works.complete_delete(15);

        assert_eq!(ids(&works), vec![4, 8, 16, 23]);
    }

    #[test]
    fn deleting_the_last_card_leaves_an_empty_list() {
        let mut works = list(&[42]);

        assert!(works.begin_delete(42));
        works.complete_delete(42);

        assert!(works.is_empty());
    }

    #[test]
    fn same_card_cannot_be_deleted_twice_while_in_flight() {
        let mut works = list(&[1, 2]);

        assert!(works.begin_delete(1));
        assert!(!works.begin_delete(1));
        assert!(works.is_pending(1));
    }

    #[test]
    fn different_cards_can_be_deleted_concurrently() {
        let mut works = list(&[1, 2, 3]);

        assert!(works.begin_delete(1));
        assert!(works.begin_delete(3));
        works.complete_delete(3);
        works.complete_delete(1);

        assert_eq!(ids(&works), vec![2]);
    }

    #[test]
    fn failed_delete_restores_the_control() {
        let mut works = list(&[1, 2]);

        works.begin_delete(2);
        works.abort_delete(2);

        assert!(!works.is_pending(2));
        assert_eq!(ids(&works), vec![1, 2]);
        assert!(works.begin_delete(2));
    }

    #[test]
    fn only_one_upload_runs_at_a_time() {
        let mut works = list(&[1]);

        assert!(works.begin_create());
        assert!(works.is_creating());
        assert!(!works.begin_create());

        works.finish_create();

        assert!(!works.is_creating());
        assert!(works.begin_create());
    }

    #[test]
    fn upload_state_survives_a_list_reload() {
        let mut works = list(&[1]);
        works.begin_create();

        works.replace(list(&[1, 2]).works().to_vec());

        assert!(works.is_creating());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut works = list(&[1]);

        assert!(!works.begin_delete(99));
    }

    #[test]
    fn reload_drops_pending_marks_for_vanished_items() {
        let mut works = list(&[1, 2]);
        works.begin_delete(1);
        works.begin_delete(2);

        works.replace(list(&[2]).works().to_vec());

        assert!(!works.is_pending(1));
        assert!(works.is_pending(2));
    }
}
