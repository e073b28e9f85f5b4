//! # CREATE_COLLECTION
//!
//! Issues the signer's collection and its three starter moji.
//!
//! 1. Read `collection_address(signer)`; must be empty (`OwnerAlreadyExists`).
//! 2. Derive three DNA strands from the signature.
//! 3. Write the collection and the three moji in one batch.

use super::write_batch;
use crate::domain::addressing::AddressCodec;
use crate::domain::dna::{derive_dna, STARTER_MOJI};
use crate::domain::entities::{Collection, Moji};
use crate::domain::invariants::check_collection_invariant;
use crate::domain::value_objects::{PublicKey, Signature, StateAddress};
use crate::errors::{ApplyError, InvalidTransaction};
use crate::ports::outbound::{PayloadCodec, StateContext};
use crate::FAMILY_NAME;
use moji_telemetry::log_tx_event;
use std::collections::BTreeMap;

/// The four records `CREATE_COLLECTION` writes, keyed by address.
#[derive(Clone, Debug)]
pub struct StarterSet {
    pub collection_address: StateAddress,
    pub collection: Collection,
    pub moji: [(StateAddress, Moji); STARTER_MOJI],
}

/// Build the records for `owner`'s collection. Pure and replayable.
#[must_use]
pub fn starter_set(addresses: &AddressCodec, owner: &PublicKey, signature: &Signature) -> StarterSet {
    let moji = derive_dna(signature).map(|dna| {
        let address = addresses.moji_address(owner, &dna);
        (address, Moji::starter(owner.clone(), dna))
    });
    let collection = Collection::new(owner.clone(), moji.clone().map(|(address, _)| address));

    StarterSet {
        collection_address: addresses.collection_address(owner),
        collection,
        moji,
    }
}

pub(crate) async fn create_collection<C: PayloadCodec>(
    addresses: &AddressCodec,
    codec: &C,
    context: &dyn StateContext,
    owner: &PublicKey,
    signature: &Signature,
) -> Result<Vec<StateAddress>, ApplyError> {
    let collection_address = addresses.collection_address(owner);
    if context.exists(&collection_address).await? {
        return Err(InvalidTransaction::OwnerAlreadyExists.into());
    }

    let set = starter_set(addresses, owner, signature);
    let moji: Vec<Moji> = set.moji.iter().map(|(_, moji)| moji.clone()).collect();
    check_collection_invariant(addresses, &set.collection, &moji)?;

    let mut updates = BTreeMap::new();
    updates.insert(set.collection_address, codec.encode_collection(&set.collection)?);
    for (address, moji) in &set.moji {
        updates.insert(address.clone(), codec.encode_moji(moji)?);
    }

    let written = write_batch(context, updates).await?;
    log_tx_event!(
        debug,
        FAMILY_NAME,
        "Collection created",
        owner,
        address = %collection_address,
        moji = STARTER_MOJI
    );
    Ok(written)
}
