//! Read-side queries for clients viewing an owner's moji.
//!
//! Absent records are `Ok(None)`. Records that fail to decode are codec errors.

use super::MojiHandler;
use crate::domain::entities::{Collection, Moji, SireListing};
use crate::domain::value_objects::{PublicKey, StateAddress};
use crate::errors::{ApplyError, CodecError};
use crate::ports::outbound::{PayloadCodec, StateContext};

/// A moji together with the address it is stored at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedMoji {
    pub address: StateAddress,
    pub moji: Moji,
}

impl<C: PayloadCodec> MojiHandler<C> {
    /// The collection owned by `owner`.
    pub async fn load_collection(
        &self,
        context: &dyn StateContext,
        owner: &PublicKey,
    ) -> Result<Option<Collection>, ApplyError> {
        let address = self.addresses.collection_address(owner);
        self.load(context, &address, |bytes| self.codec.decode_collection(bytes))
            .await
    }

    /// The moji stored at `address`.
    pub async fn load_moji(
        &self,
        context: &dyn StateContext,
        address: &StateAddress,
    ) -> Result<Option<Moji>, ApplyError> {
        self.load(context, address, |bytes| self.codec.decode_moji(bytes))
            .await
    }

    /// The sire currently listed by `owner`.
    pub async fn load_sire_listing(
        &self,
        context: &dyn StateContext,
        owner: &PublicKey,
    ) -> Result<Option<SireListing>, ApplyError> {
        let address = self.addresses.sire_address(owner);
        self.load(context, &address, |bytes| self.codec.decode_sire_listing(bytes))
            .await
    }

    /// Every moji referenced by `owner`'s collection, in collection order.
    ///
    /// Empty if `owner` has no collection. Referenced addresses with no state
    /// are skipped.
    pub async fn load_owned_moji(
        &self,
        context: &dyn StateContext,
        owner: &PublicKey,
    ) -> Result<Vec<OwnedMoji>, ApplyError> {
        let Some(collection) = self.load_collection(context, owner).await? else {
            return Ok(Vec::new());
        };

        let state = context.get_state(&collection.moji_addresses).await?;
        let mut owned = Vec::with_capacity(collection.moji_addresses.len());
        for address in collection.moji_addresses {
            match state.get(&address) {
                Some(bytes) if !bytes.is_empty() => {
                    let moji = self.codec.decode_moji(bytes)?;
                    owned.push(OwnedMoji { address, moji });
                }
                _ => {}
            }
        }
        Ok(owned)
    }

    async fn load<T>(
        &self,
        context: &dyn StateContext,
        address: &StateAddress,
        decode: impl FnOnce(&[u8]) -> Result<T, CodecError>,
    ) -> Result<Option<T>, ApplyError> {
        let state = context.get_state(std::slice::from_ref(address)).await?;
        match state.get(address) {
            Some(bytes) if !bytes.is_empty() => Ok(Some(decode(bytes)?)),
            _ => Ok(None),
        }
    }
}
