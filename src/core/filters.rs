use crate::models::Profile;

/// Check whether two profiles accept each other's gender
///
/// Both directions must hold; one-sided interest is not a match.
#[inline]
pub fn is_mutually_compatible(subject: &Profile, candidate: &Profile) -> bool {
    subject.accepts(candidate.gender) && candidate.accepts(subject.gender)
}

/// Check if a profile is a valid candidate for the subject
///
/// This is the filter stage of the pipeline: the subject itself is
/// never a candidate, everyone else must be mutually compatible.
#[inline]
pub fn is_candidate(subject: &Profile, profile: &Profile) -> bool {
    profile.id != subject.id && is_mutually_compatible(subject, profile)
}

/// Narrow a directory slice down to the subject's compatible candidates,
/// preserving directory order
pub fn compatible_candidates<'a, I>(subject: &Profile, profiles: I) -> Vec<&'a Profile>
where
    I: IntoIterator<Item = &'a Profile>,
{
    profiles
        .into_iter()
        .filter(|profile| is_candidate(subject, profile))
        .collect()
}
