//! Member directory loading and role enrichment.

use std::collections::HashMap;

use crate::domain::member::{CommissionAssignment, FunctionAssignment, Member};
use crate::domain::types::{ClubId, MemberId};
use crate::repository::MemberReader;
use crate::services::{ServiceError, ServiceResult};

/// Groups assignment payloads by member id, keeping their upstream order.
fn group_by_member<T>(
    assignments: impl IntoIterator<Item = (MemberId, T)>,
) -> HashMap<MemberId, Vec<T>> {
    let mut grouped: HashMap<MemberId, Vec<T>> = HashMap::new();
    for (member_id, payload) in assignments {
        grouped.entry(member_id).or_default().push(payload);
    }
    grouped
}

/// Attaches function assignments to every member.
///
/// Members without a matching assignment get an empty list. Assignments
/// referencing unknown members are ignored.
pub fn attach_functions(members: Vec<Member>, functions: Vec<FunctionAssignment>) -> Vec<Member> {
    let by_member = group_by_member(
        functions
            .into_iter()
            .map(|assignment| (assignment.membre_id, assignment.function)),
    );

    members
        .into_iter()
        .map(|mut member| {
            member.fonctions = Some(by_member.get(&member.id).cloned().unwrap_or_default());
            member
        })
        .collect()
}

/// Attaches commission assignments to every member, like [`attach_functions`].
pub fn attach_commissions(
    members: Vec<Member>,
    commissions: Vec<CommissionAssignment>,
) -> Vec<Member> {
    let by_member = group_by_member(
        commissions
            .into_iter()
            .map(|assignment| (assignment.membre_id, assignment.commission)),
    );

    members
        .into_iter()
        .map(|mut member| {
            member.commissions = Some(by_member.get(&member.id).cloned().unwrap_or_default());
            member
        })
        .collect()
}

/// Attaches functions and commissions to every member.
///
/// The output has the same length and order as `members`. Assignments keep
/// their upstream order within each member; members without assignments get
/// empty lists.
pub fn attach_assignments(
    members: Vec<Member>,
    functions: Vec<FunctionAssignment>,
    commissions: Vec<CommissionAssignment>,
) -> Vec<Member> {
    attach_commissions(attach_functions(members, functions), commissions)
}

/// Fetches the club's function and commission assignments and joins them onto `members`.
///
/// Both lists are requested concurrently and joined independently: a list
/// whose fetch fails is logged and left `None` on every member, while the
/// other one is still attached.
pub async fn enrich_members<R>(repo: &R, club_id: &ClubId, members: Vec<Member>) -> Vec<Member>
where
    R: MemberReader + ?Sized,
{
    let (functions, commissions) = futures::join!(
        repo.list_function_assignments(club_id),
        repo.list_commission_assignments(club_id),
    );

    let members = match functions {
        Ok(functions) => {
            log::debug!(
                "Joining {} function assignments onto {} members",
                functions.len(),
                members.len()
            );
            attach_functions(members, functions)
        }
        Err(err) => {
            log::warn!("Failed to load function assignments of club {club_id}: {err}");
            members
        }
    };

    match commissions {
        Ok(commissions) => {
            log::debug!(
                "Joining {} commission assignments onto {} members",
                commissions.len(),
                members.len()
            );
            attach_commissions(members, commissions)
        }
        Err(err) => {
            log::warn!("Failed to load commission assignments of club {club_id}: {err}");
            members
        }
    }
}

/// Loads the members of a club with their functions and commissions.
///
/// A failing member list is surfaced to the caller. A failing assignment
/// fetch is only logged: that list stays unloaded and no member is dropped
/// from the directory.
pub async fn load_members<R>(repo: &R, club_id: &ClubId) -> ServiceResult<Vec<Member>>
where
    R: MemberReader + ?Sized,
{
    let members = repo.list_members(club_id).await.map_err(|err| {
        log::error!("Failed to load members of club {club_id}: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Loaded {} members for club {club_id}", members.len());

    Ok(enrich_members(repo, club_id, members).await)
}
