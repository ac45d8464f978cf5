//! Connection requests and the friend list.
//!
//! A request is allowed freely while the sender has fewer than
//! `network.free_request_quota` accepted connections. Past that, the target
//! must be within `network.request_max_hops` of the sender; a check that
//! cannot decide denies the request.

use profnet_core::errors::{ProfnetError, ProfnetResult};
use profnet_core::models::{ConnectionEdge, ConnectionStatus};
use profnet_core::traits::IConnectionStorage;
use profnet_graph::{Reachability, UnknownReason};
use profnet_observability::{connectivity_span, request_span};

use crate::engine::NetworkEngine;
use crate::session::AuthenticatedUser;
use crate::validation;

impl NetworkEngine {
    pub fn send_connection_request(
        &self,
        actor: &AuthenticatedUser,
        target: &str,
    ) -> ProfnetResult<ConnectionEdge> {
        let _span = request_span!("send", actor, target).entered();
        let from = actor.user_id();

        validation::require_non_empty("target", target)?;
        if target == from {
            return Err(ProfnetError::invalid("target", "cannot connect to yourself"));
        }
        self.require_user(target)?;

        let outgoing = self.storage.get_connection(from, target)?;
        let incoming = self.storage.get_connection(target, from)?;
        for edge in outgoing.iter().chain(incoming.iter()) {
            match edge.status {
                ConnectionStatus::Accept => {
                    return Err(ProfnetError::AlreadyConnected {
                        from: from.to_string(),
                        to: target.to_string(),
                    })
                }
                ConnectionStatus::Request => {
                    return Err(ProfnetError::RequestPending {
                        from: edge.user_id.clone(),
                        to: edge.connection_id.clone(),
                    })
                }
                ConnectionStatus::Reject => {}
            }
        }

        self.check_request_allowed(from, target)?;

        let edge = ConnectionEdge::new(from, target, ConnectionStatus::Request);
        self.storage.upsert_connection(&edge)?;
        tracing::info!("connection request sent");
        Ok(edge)
    }

    fn check_request_allowed(&self, from: &str, target: &str) -> ProfnetResult<()> {
        let network = &self.config.network;
        let accepted = self.storage.accepted_count(from)?;
        if accepted < network.free_request_quota {
            return Ok(());
        }

        let _span = connectivity_span!(from, target, network.request_max_hops).entered();
        let report = self.checker().check(from, target, network.request_max_hops)?;
        let reason = match report.reachability {
            Reachability::Connected { hops } => {
                tracing::debug!(hops, "request target within reach");
                return Ok(());
            }
            Reachability::NotConnected => format!(
                "{target} is not within {} hops of {from}",
                network.request_max_hops
            ),
            Reachability::Unknown { reason } => {
                format!("could not determine reachability of {target}: {}", describe(&reason))
            }
        };
        tracing::warn!(accepted, %reason, "connection request denied");
        Err(ProfnetError::RequestNotAllowed { reason })
    }

    /// Requests addressed to the actor that are still awaiting an answer.
    pub fn pending_requests(
        &self,
        actor: &AuthenticatedUser,
    ) -> ProfnetResult<Vec<ConnectionEdge>> {
        self.storage
            .incoming_connections(actor.user_id(), ConnectionStatus::Request)
    }

    /// Accept or reject a pending request from `requester`.
    pub fn respond_to_request(
        &self,
        actor: &AuthenticatedUser,
        requester: &str,
        response: ConnectionStatus,
    ) -> ProfnetResult<()> {
        let _span = request_span!("respond", actor, requester).entered();

        if response == ConnectionStatus::Request {
            return Err(ProfnetError::invalid("response", "must be Accept or Reject"));
        }
        let not_found = || ProfnetError::RequestNotFound {
            from: requester.to_string(),
            to: actor.user_id().to_string(),
        };
        match self.storage.get_connection(requester, actor.user_id())? {
            Some(edge) if edge.status == ConnectionStatus::Request => {}
            _ => return Err(not_found()),
        }
        if !self
            .storage
            .update_connection_status(requester, actor.user_id(), response)?
        {
            return Err(not_found());
        }

        tracing::info!(%response, "connection request answered");
        Ok(())
    }

    /// The actor's accepted connections.
    pub fn connections(&self, actor: &AuthenticatedUser) -> ProfnetResult<Vec<String>> {
        self.checker().neighbors(actor.user_id())
    }

    pub fn is_connected_within_hops(
        &self,
        actor: &AuthenticatedUser,
        other: &str,
        max_hops: usize,
    ) -> bool {
        let _span = connectivity_span!(actor, other, max_hops).entered();
        self.checker()
            .is_connected_within_hops(actor.user_id(), other, max_hops)
    }
}

fn describe(reason: &UnknownReason) -> String {
    match reason {
        UnknownReason::FetchFailed { node, message } => {
            format!("fetch for {node} failed: {message}")
        }
        UnknownReason::DeadlineExceeded => "deadline exceeded".to_string(),
        UnknownReason::FetchBudgetExhausted => "fetch budget exhausted".to_string(),
    }
}
