//! Sigma protocols for discrete-log relations, with composition and
//! zero-knowledge transforms.
//!
//! The building blocks:
//! - [`dh_tuple::DhTupleStatement`]: the generic 3-move protocol for "one
//!   hidden exponent satisfies many base/target pairs at once".
//! - [`statements`]: reducers that rewrite ElGamal and Cramer-Shoup
//!   relations into that canonical form and delegate to the engine.
//! - [`composition`]: AND (shared challenge) and two-branch OR (XOR
//!   challenge sharing) combinators over any [`traits::SigmaProtocol`].
//! - [`zk`]: the interactive transform, full zero knowledge via a perfectly
//!   hiding commitment to the verifier's challenge.
//! - [`fiat_shamir`]: the non-interactive transform, with the challenge
//!   derived by a random oracle over statement, first message, and context.
//!
//! External capabilities (group arithmetic, commitment schemes, random
//! oracles, transports) enter through the traits in [`group`],
//! [`commitment`], [`fiat_shamir`], and [`channel`]; the protocols own none
//! of them.

pub mod channel;
pub mod commitment;
pub mod composition;
pub mod dh_tuple;
pub mod errors;
pub mod fiat_shamir;
pub mod group;
pub mod messages;
pub mod statements;
pub mod test_utils;
pub mod traits;
pub mod zk;

pub use channel::{Channel, ChannelMessage};
pub use commitment::{CommitmentScheme, PedersenCommitment};
pub use composition::{AndComposition, OrBranch, OrComposition, OrWitness};
pub use dh_tuple::DhTupleStatement;
pub use errors::Error;
pub use fiat_shamir::{Nizk, RandomOracle, ShakeRandomOracle};
pub use group::{PrimeOrderGroup, SchnorrGroup};
pub use messages::{Challenge, FiatShamirProof, ProtocolMessage};
pub use traits::{SigmaProtocol, SigmaProtocolSimulator};
pub use zk::{ZkProver, ZkVerifier};
