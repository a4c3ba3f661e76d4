//! Enneagram pairing table: one entry for each of the 45 unordered type pairs.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::pairing::{CanonicalPair, PairProfile};
use crate::domain::frameworks::EnneagramType;

const fn pair(
    chemistry: &'static str,
    strengths: &'static [&'static str],
    friction: &'static [&'static str],
    communication_tips: &'static [&'static str],
    delegation_tips: &'static [&'static str],
) -> PairProfile {
    PairProfile {
        chemistry,
        strengths,
        friction,
        communication_tips,
        delegation_tips,
    }
}

// Keyed (low, high) by type number.
static ENNEAGRAM_PAIR_DATA: [(u8, u8, PairProfile); 45] = [
    (1, 1, pair(
        "Two principled perfectionists who hold each other to a high bar.",
        &["Shared standards", "Reliable, ethical work"],
        &["Mutual criticism", "Rigidity about the one right way"],
        &["Acknowledge what is already good before correcting"],
        &["Agree on the standard up front, then trust it"],
    )),
    (1, 2, pair(
        "Structure meets care: doing right by the work and by people.",
        &["1 brings order, 2 brings warmth", "Both are conscientious"],
        &["2 may feel unappreciated", "1 may see 2 as overly accommodating"],
        &["1: voice appreciation explicitly", "2: state needs directly"],
        &["Give 2 people-facing tasks with clear quality criteria"],
    )),
    (1, 3, pair(
        "Quality meets speed: both are driven, for different reasons.",
        &["High output", "Shared work ethic"],
        &["1 resists shortcuts 3 is happy to take", "3 finds 1 slow"],
        &["Discuss what done looks like before starting"],
        &["Let 3 own the timeline and 1 own the quality gate"],
    )),
    (1, 4, pair(
        "Idealists both: one about correctness, the other about authenticity.",
        &["Both care deeply about meaning", "Strong shared values"],
        &["1's rules can feel stifling to 4", "4's moods can feel unpredictable to 1"],
        &["Separate feelings from feedback on the work"],
        &["Give 4 room for creative interpretation within a clear brief"],
    )),
    (1, 5, pair(
        "Precise and reserved: a quiet, rigorous partnership.",
        &["Careful analysis", "Low drama"],
        &["Both withdraw under stress", "Debates over correctness"],
        &["Put disagreements in writing with evidence"],
        &["Give 5 autonomy and 1 the review"],
    )),
    (1, 6, pair(
        "Responsible and dutiful: a pairing that keeps promises.",
        &["Reliability", "Risk awareness"],
        &["Worry and criticism feed each other", "Slow to change course"],
        &["Name the risk and the decision in the same conversation"],
        &["Document processes and owners"],
    )),
    (1, 7, pair(
        "Discipline meets spontaneity: each has what the other lacks.",
        &["7 lightens 1, 1 grounds 7", "Good balance of vision and rigour"],
        &["7 skips details", "1 can come across as a wet blanket"],
        &["1: frame constraints as enablers", "7: confirm specifics in writing"],
        &["Pair 7's launches with 1's follow-through"],
    )),
    (1, 8, pair(
        "Two strong wills with a sense of justice.",
        &["Both act decisively on principle", "Straight talk"],
        &["Clashes over control", "Anger on both sides"],
        &["Debate the issue, not each other"],
        &["Divide authority explicitly"],
    )),
    (1, 9, pair(
        "Order and calm: steady, but slow to surface conflict.",
        &["Stable, principled collaboration", "9 softens 1's edges"],
        &["9 goes passive under 1's criticism", "1 reads 9 as unmotivated"],
        &["Ask 9 directly for an opinion and wait for it"],
        &["Give 9 clear priorities, fewer at a time"],
    )),
    (2, 2, pair(
        "Two helpers: generous, attuned, and sometimes overextended.",
        &["Deep care for the team", "Excellent relationship building"],
        &["Both neglect their own needs", "Competing to be needed"],
        &["Ask each other what you need, not only what others need"],
        &["Protect focus time so helping does not crowd out delivery"],
    )),
    (2, 3, pair(
        "Charm and polish: a pairing that wins people over.",
        &["Strong external presence", "Mutual encouragement"],
        &["Image can crowd out honesty", "2 may feel used by 3's goals"],
        &["Say the real concern, not the agreeable one"],
        &["Credit contributions openly"],
    )),
    (2, 4, pair(
        "Heart-centred and expressive: emotionally rich.",
        &["Empathy", "Creative support"],
        &["Intensity escalates", "Hurt feelings linger"],
        &["Check in on feelings before facts"],
        &["Set boundaries on scope so care does not become overreach"],
    )),
    (2, 5, pair(
        "Warmth meets distance: one moves toward, the other steps back.",
        &["2 connects 5 to people", "5 gives 2 perspective"],
        &["2 feels shut out", "5 feels crowded"],
        &["2: give space; 5: signal appreciation"],
        &["Let 5 work independently and 2 coordinate"],
    )),
    (2, 6, pair(
        "Loyal and supportive: a dependable team bond.",
        &["High trust once built", "Mutual care"],
        &["Anxiety and people-pleasing reinforce each other"],
        &["Reassure with specifics, not just warmth"],
        &["Clarify responsibilities to avoid quiet resentment"],
    )),
    (2, 7, pair(
        "Upbeat and social: fun, generous, and busy.",
        &["Positive energy", "Great with people"],
        &["Avoidance of hard topics", "Overcommitment"],
        &["Schedule the serious conversation"],
        &["Prioritize ruthlessly and write it down"],
    )),
    (2, 8, pair(
        "Protector and helper: strong, caring, and loyal.",
        &["8 champions, 2 nurtures", "Fierce loyalty to the team"],
        &["Control struggles disguised as help", "2 feels steamrolled"],
        &["8: ask before acting", "2: say no when you mean no"],
        &["Give 2 authority, not just tasks"],
    )),
    (2, 9, pair(
        "Gentle and accommodating: harmonious but conflict-averse.",
        &["Supportive atmosphere", "Patience"],
        &["Issues stay buried", "Both defer"],
        &["Use a regular slot for raising problems"],
        &["Assign clear decision owners"],
    )),
    (3, 3, pair(
        "Two achievers: ambitious, fast, and competitive.",
        &["High performance", "Shared drive for results"],
        &["Competing for credit", "Burnout"],
        &["Define shared wins, not just individual ones"],
        &["Split visible goals clearly"],
    )),
    (3, 4, pair(
        "Image meets authenticity: polish against depth.",
        &["3 gets it shipped, 4 makes it meaningful"],
        &["4 sees 3 as superficial", "3 sees 4 as self-absorbed"],
        &["3: slow down for substance", "4: keep outcomes in view"],
        &["Let 4 own the creative core and 3 the delivery"],
    )),
    (3, 5, pair(
        "Execution meets expertise.",
        &["3 markets what 5 builds", "Efficient when roles are clear"],
        &["3 rushes 5", "5 withholds from 3"],
        &["Agree on research time before deadlines"],
        &["Give 5 the deep work and 3 the stakeholders"],
    )),
    (3, 6, pair(
        "Confidence meets caution: speed tempered by loyalty.",
        &["6 stress-tests 3's plans", "3 motivates 6 to act"],
        &["6 distrusts spin", "3 finds 6's doubts draining"],
        &["3: be transparent about risks", "6: voice doubts as questions"],
        &["Pair 3's goals with 6's contingency plans"],
    )),
    (3, 7, pair(
        "High energy and optimism: a fast-moving duo.",
        &["Momentum", "Enthusiasm that inspires others"],
        &["Depth and follow-through suffer", "Avoidance of failure talk"],
        &["Hold a real retrospective after each push"],
        &["Assign a finisher for every initiative"],
    )),
    (3, 8, pair(
        "Two powerhouses: results-driven and assertive.",
        &["Get big things done", "Decisive leadership"],
        &["Ego clashes", "8 distrusts 3's image management"],
        &["Be blunt and honest with each other"],
        &["Separate domains of authority"],
    )),
    (3, 9, pair(
        "Drive meets ease: 3 energizes, 9 stabilizes.",
        &["9 calms 3's intensity", "3 helps 9 prioritize"],
        &["9 feels pushed", "3 feels held back"],
        &["Ask 9 what matters most to them"],
        &["Give 9 steady responsibilities rather than sprints"],
    )),
    (4, 4, pair(
        "Deeply authentic and emotionally attuned.",
        &["Creative depth", "Understanding without explanation"],
        &["Shared moodiness", "Comparisons and envy"],
        &["Name feelings and then pick one next step"],
        &["Set concrete milestones for creative work"],
    )),
    (4, 5, pair(
        "Depth on both sides: feeling and thinking introverts.",
        &["Original ideas", "Respect for each other's inner world"],
        &["Isolation", "Little drive to execute"],
        &["Share drafts early"],
        &["Bring in an external deadline or partner"],
    )),
    (4, 6, pair(
        "Sensitive and loyal: an emotionally honest bond.",
        &["Empathy for struggle", "Commitment"],
        &["Anxiety and melancholy amplify each other"],
        &["Anchor conversations in concrete facts"],
        &["Define clear scope to reduce uncertainty"],
    )),
    (4, 7, pair(
        "Depth meets breadth: intensity against lightness.",
        &["Creative, varied ideas", "7 lifts 4, 4 deepens 7"],
        &["7 avoids pain 4 wants to explore", "4 finds 7 flighty"],
        &["7: stay with hard topics", "4: accept a lighter touch sometimes"],
        &["Give 7 ideation and 4 refinement"],
    )),
    (4, 8, pair(
        "Intense and honest: both value real over polite.",
        &["Authenticity", "Passion"],
        &["Explosive conflict", "8 can overpower 4"],
        &["8: soften delivery", "4: be direct about hurt"],
        &["Give 4 ownership of the vision, 8 of execution"],
    )),
    (4, 9, pair(
        "Introspective and gentle: quietly creative.",
        &["Acceptance", "Imagination"],
        &["Drift", "Withdrawal under stress"],
        &["Meet regularly even when nothing is urgent"],
        &["Set a single clear priority at a time"],
    )),
    (5, 5, pair(
        "Two thinkers: independent, deep, and private.",
        &["Expertise", "Respect for autonomy"],
        &["Little communication", "Decisions deferred indefinitely"],
        &["Schedule short, structured syncs"],
        &["Split by domain and document interfaces"],
    )),
    (5, 6, pair(
        "Analytical and careful: a thoughtful pairing.",
        &["Thorough risk analysis", "Loyalty to ideas that hold up"],
        &["Overthinking", "6 wants reassurance 5 does not offer"],
        &["5: share your reasoning; 6: trust the evidence"],
        &["Give 6 the plan and 5 the research"],
    )),
    (5, 7, pair(
        "Head types both: deep focus against wide curiosity.",
        &["Ideas flow", "Intellectual fun"],
        &["7 scatters, 5 hoards", "Execution stalls"],
        &["Capture ideas in a shared list and choose together"],
        &["Assign one owner per idea"],
    )),
    (5, 8, pair(
        "Brains meets muscle: strategic and forceful.",
        &["5 plans, 8 executes", "Both value competence"],
        &["8 overwhelms 5", "5 withdraws from 8"],
        &["8: give 5 time to think before demanding an answer"],
        &["Let 5 own the analysis behind 8's decisions"],
    )),
    (5, 9, pair(
        "Quiet and low-key: calm and unhurried.",
        &["Stable environment", "No power struggles"],
        &["Inertia", "Unspoken disagreements"],
        &["Ask explicit questions and answer them"],
        &["Use deadlines to create momentum"],
    )),
    (6, 6, pair(
        "Two loyalists: committed and cautious.",
        &["Trust", "Preparation for every scenario"],
        &["Worry spirals", "Slow decisions"],
        &["Name the worst case, then the likely case"],
        &["Set clear authority so decisions do not stall"],
    )),
    (6, 7, pair(
        "Caution meets optimism: a natural check and balance.",
        &["6 plans for risk, 7 sees opportunity"],
        &["7 dismisses 6's concerns", "6 dampens 7's ideas"],
        &["7: take concerns seriously", "6: acknowledge upside"],
        &["Pair each 7 idea with a 6 risk review"],
    )),
    (6, 8, pair(
        "Loyalty meets strength: a protective alliance.",
        &["8 gives 6 confidence", "6 gives 8 foresight"],
        &["6 tests 8's trustworthiness", "8 reads questions as challenges"],
        &["8: be consistent", "6: ask directly rather than testing"],
        &["Spell out commitments and keep them"],
    )),
    (6, 9, pair(
        "Steady and supportive: a low-conflict partnership.",
        &["Dependability", "Harmony"],
        &["Avoidance", "Indecision"],
        &["Decide together on a fixed date"],
        &["Give each a clear lane"],
    )),
    (7, 7, pair(
        "Two enthusiasts: creative, energetic, and restless.",
        &["Innovation", "Fun"],
        &["Nothing gets finished", "Pain is avoided"],
        &["Commit to one thing before starting the next"],
        &["Bring in a finisher or use strict checkpoints"],
    )),
    (7, 8, pair(
        "Assertive and energetic: bold, fast, and ambitious.",
        &["Big vision and the drive to realize it", "Shared appetite for action"],
        &["Excess", "Collisions when both want the lead"],
        &["Pause before committing resources"],
        &["8 owns the call, 7 owns the options"],
    )),
    (7, 9, pair(
        "Easygoing and positive: relaxed and friendly.",
        &["Optimism", "Low tension"],
        &["Avoidance of hard topics", "Drift"],
        &["Make space for bad news"],
        &["Set concrete outcomes and dates"],
    )),
    (8, 8, pair(
        "Two challengers: powerful, protective, and combustible.",
        &["Unstoppable when aligned", "Total honesty"],
        &["Turf wars", "Escalation"],
        &["Fight fair and fast, then move on"],
        &["Divide territory clearly"],
    )),
    (8, 9, pair(
        "Strength and calm: the classic complementary pair.",
        &["9 grounds 8, 8 energizes 9", "Mutual protection"],
        &["8 dominates", "9 goes passive-aggressive"],
        &["8: ask and wait", "9: speak up early"],
        &["Give 9 real authority over something"],
    )),
    (9, 9, pair(
        "Two peacemakers: calm, accepting, and easy together.",
        &["Harmony", "Inclusive atmosphere"],
        &["Inertia", "Conflict never addressed"],
        &["Take turns voicing priorities"],
        &["Use external deadlines to drive progress"],
    )),
];

static ENNEAGRAM_PAIRS: Lazy<HashMap<CanonicalPair<EnneagramType>, &'static PairProfile>> =
    Lazy::new(|| {
        ENNEAGRAM_PAIR_DATA
            .iter()
            .filter_map(|(a, b, profile)| {
                let a = EnneagramType::new(*a).ok()?;
                let b = EnneagramType::new(*b).ok()?;
                Some((CanonicalPair::new(a, b), profile))
            })
            .collect()
    });

/// Pair entry for two types, in either order.
pub fn enneagram_pairing(a: EnneagramType, b: EnneagramType) -> Option<&'static PairProfile> {
    ENNEAGRAM_PAIRS.get(&CanonicalPair::new(a, b)).copied()
}

/// Pair entry for two raw numbers; numbers outside 1..=9 yield `None`.
pub fn enneagram_pairing_numbers(a: u8, b: u8) -> Option<&'static PairProfile> {
    let a = EnneagramType::new(a).ok()?;
    let b = EnneagramType::new(b).ok()?;
    enneagram_pairing(a, b)
}
