//! # SELECT_SIRE
//!
//! Publishes the signer's chosen sire at `sire_address(signer)`.
//!
//! 1. Read `collection_address(signer)`; must hold state (`NoCollection`).
//! 2. The sire must be present, well formed and hold state (`SireNotFound`).
//! 3. Write the listing.
//!
//! Only existence is checked: the sire need not be a moji, nor owned by the
//! signer. A later selection overwrites the earlier one.

use super::write_batch;
use crate::domain::addressing::AddressCodec;
use crate::domain::entities::SireListing;
use crate::domain::value_objects::{PublicKey, StateAddress};
use crate::errors::{ApplyError, InvalidTransaction};
use crate::ports::outbound::{PayloadCodec, StateContext};
use crate::FAMILY_NAME;
use moji_telemetry::log_tx_event;
use std::collections::BTreeMap;

pub(crate) async fn select_sire<C: PayloadCodec>(
    addresses: &AddressCodec,
    codec: &C,
    context: &dyn StateContext,
    owner: &PublicKey,
    sire: Option<&str>,
) -> Result<Vec<StateAddress>, ApplyError> {
    if !context.exists(&addresses.collection_address(owner)).await? {
        return Err(InvalidTransaction::NoCollection.into());
    }

    // An absent or malformed address cannot hold state.
    let sire = sire
        .and_then(StateAddress::parse)
        .ok_or(InvalidTransaction::SireNotFound)?;
    if !context.exists(&sire).await? {
        return Err(InvalidTransaction::SireNotFound.into());
    }

    let listing_address = addresses.sire_address(owner);
    let listing = SireListing {
        owner: owner.clone(),
        sire,
    };

    let mut updates = BTreeMap::new();
    updates.insert(listing_address.clone(), codec.encode_sire_listing(&listing)?);
    let written = write_batch(context, updates).await?;

    log_tx_event!(
        debug,
        FAMILY_NAME,
        "Sire selected",
        owner,
        address = %listing_address,
        sire = %listing.sire
    );
    Ok(written)
}
