use log::info;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::UserStore;
use crate::domain::user::{Address, AddressRecord, User, UserRecord};

pub struct UserService<S> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Upserts the user and its address together; returns the user id.
    pub fn create_user(&self, user: User) -> Result<String, DomainError> {
        let (record, address) = user_to_records(user)?;
        self.save(&record, &address)?;
        info!("created user {}", record.id);
        Ok(record.id)
    }

    pub fn update_user(&self, id: &str, mut user: User) -> Result<(), DomainError> {
        if user.id.is_empty() {
            user.id = id.to_string();
        } else if user.id != id {
            return Err(DomainError::InvalidInput(format!(
                "user id {} does not match path id {}",
                user.id, id
            )));
        }
        let (record, address) = user_to_records(user)?;
        self.save(&record, &address)?;
        info!("updated user {}", id);
        Ok(())
    }

    pub fn get_user(&self, id: &str) -> Result<User, DomainError> {
        self.store.in_transaction(|repo| {
            let record = repo.get_user(id)?;
            let address = repo.get_address(&record.address_id)?;
            Ok(records_to_user(record, address))
        })
    }

    /// Deletes the user record; its address row is left in place.
    pub fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        self.store.in_transaction(|repo| repo.delete_user(id))?;
        info!("deleted user {}", id);
        Ok(())
    }

    fn save(&self, record: &UserRecord, address: &AddressRecord) -> Result<(), DomainError> {
        self.store.in_transaction(|repo| {
            repo.upsert_user(record)?;
            repo.upsert_address(address)
        })
    }
}

fn user_to_records(user: User) -> Result<(UserRecord, AddressRecord), DomainError> {
    let id = if user.id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        user.id
    };
    let address_id = if user.address.address_id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        user.address.address_id
    };

    let record = UserRecord {
        id,
        name: user.name,
        email: user.email,
        mobile: user.mobile,
        address_id: address_id.clone(),
        role: user.role,
    };
    let address = AddressRecord {
        address_id,
        line1: user.address.line1,
        line2: user.address.line2,
        city: user.address.city,
        state: user.address.state,
        country: user.address.country,
        zip_code: user.address.zip_code,
    };

    record.validate()?;
    address.validate()?;
    Ok((record, address))
}

fn records_to_user(record: UserRecord, address: AddressRecord) -> User {
    User {
        id: record.id,
        name: record.name,
        email: record.email,
        mobile: record.mobile,
        address: Address {
            address_id: address.address_id,
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            country: address.country,
            zip_code: address.zip_code,
        },
        role: record.role,
    }
}
