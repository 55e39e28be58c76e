use super::store::{next_id, Store};
use super::types::{Account, AccountDraft, AccountId, AccountUpdate, StoreError};

impl Store {
    // ========================================================================
    // Account Operations
    // ========================================================================

    /// Register a new account and return the stored record.
    ///
    /// Missing preferences become an empty list. Duplicate emails are not
    /// rejected here; callers check [`Store::get_account_by_email`] first.
    pub fn create_account(&mut self, draft: AccountDraft) -> Account {
        let id = next_id(&mut self.next_account_id);
        let account = Account {
            id,
            name: draft.name,
            email: draft.email,
            password: draft.password,
            preferences: draft.preferences.unwrap_or_default(),
        };

        // First registration under an email keeps the index entry
        self.email_index.entry(account.email.clone()).or_insert(id);
        self.accounts.insert(id, account.clone());

        tracing::debug!(account_id = id, "Created account");
        account
    }

    pub fn get_account(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    /// Exact email match. With duplicates, the earliest registration wins.
    pub fn get_account_by_email(&self, email: &str) -> Option<Account> {
        self.email_index
            .get(email)
            .and_then(|id| self.accounts.get(id))
            .cloned()
    }

    /// Apply a partial profile update and return the updated record.
    pub fn update_account(
        &mut self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, StoreError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(StoreError::AccountNotFound(id))?;

        if let Some(name) = update.name {
            account.name = name;
        }
        if let Some(preferences) = update.preferences {
            account.preferences = preferences;
        }

        let mut reindex = None;
        if let Some(email) = update.email {
            if email != account.email {
                let previous = std::mem::replace(&mut account.email, email.clone());
                reindex = Some((previous, email));
            }
        }
        let updated = account.clone();

        if let Some((previous, current)) = reindex {
            self.reindex_email(&previous);
            self.reindex_email(&current);
        }

        tracing::debug!(account_id = id, "Updated account");
        Ok(updated)
    }

    /// Point the index entry for `email` at the lowest account ID still using
    /// it, or drop the entry if none does.
    fn reindex_email(&mut self, email: &str) {
        let owner = self
            .accounts
            .values()
            .find(|account| account.email == email)
            .map(|account| account.id);

        match owner {
            Some(id) => {
                self.email_index.insert(email.to_owned(), id);
            }
            None => {
                self.email_index.remove(email);
            }
        }
    }
}
