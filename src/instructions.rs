//! Exercise instructions - how-to steps, common mistakes and demo GIFs

use crate::exercises::find_category_of;

/// Shown when an exercise has no written steps (user-defined exercises)
pub const STEPS_FALLBACK: &str = "Instructions coming soon...";
/// Shown when an exercise has no listed mistakes
pub const MISTAKES_FALLBACK: &str = "Common mistakes coming soon...";
/// Directory the demonstration GIFs are shipped in
pub const GIF_DIR: &str = "assets/gifs";

pub struct Instruction {
    pub exercise: &'static str,
    pub gif: &'static str,
    pub steps: &'static [&'static str],
    pub mistakes: &'static [&'static str],
}

pub const INSTRUCTIONS: &[Instruction] = &[
    Instruction {
        exercise: "Barbell Shrugs",
        gif: "barbell_shrug.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Hold a barbell in front of your thighs with an overhand grip",
            "Keep your arms straight and shoulders relaxed",
            "Lift your shoulders straight up toward your ears",
            "Hold the contraction for a second",
            "Lower the weight back down slowly",
        ],
        mistakes: &[
            "Using momentum to lift the weight",
            "Rolling the shoulders instead of lifting straight up",
            "Bending the elbows during the movement",
            "Not maintaining proper posture",
        ],
    },
    Instruction {
        exercise: "Dumbbell Shrugs",
        gif: "dumbbell_shrug.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Hold a dumbbell in each hand at your sides",
            "Keep your arms straight and shoulders relaxed",
            "Lift your shoulders straight up toward your ears",
            "Hold the contraction for a second",
            "Lower the weights back down slowly",
        ],
        mistakes: &[
            "Using momentum to lift the weights",
            "Rolling the shoulders instead of lifting straight up",
            "Bending the elbows during the movement",
            "Not maintaining proper posture",
        ],
    },
    Instruction {
        exercise: "Behind-the-Back Smith Machine Shrugs",
        gif: "smith-back_shrug.gif",
        steps: &[
            "Stand with your back to the Smith machine",
            "Grab the bar behind your back with an overhand grip",
            "Keep your arms straight and shoulders relaxed",
            "Lift your shoulders straight up toward your ears",
            "Hold the contraction for a second",
            "Lower the weight back down slowly",
        ],
        mistakes: &[
            "Using momentum to lift the weight",
            "Rolling the shoulders instead of lifting straight up",
            "Bending the elbows during the movement",
            "Not maintaining proper posture",
        ],
    },
    Instruction {
        exercise: "Rack Pulls",
        gif: "rack_pulls.gif",
        steps: &[
            "Set up a barbell in a power rack at mid-thigh height",
            "Stand close to the bar with your feet shoulder-width apart",
            "Bend at your hips and knees to grab the bar",
            "Keep your back straight and chest up",
            "Pull the bar up by extending your hips and knees",
            "Squeeze your shoulder blades together at the top",
            "Lower the bar back down slowly",
        ],
        mistakes: &[
            "Rounding the back during the lift",
            "Using too much weight and compromising form",
            "Not engaging the core properly",
            "Not fully extending at the top of the movement",
        ],
    },
    Instruction {
        exercise: "Face Pulls",
        gif: "face_pull.gif",
        steps: &[
            "Attach a rope handle to a high pulley",
            "Stand facing the machine with your feet shoulder-width apart",
            "Grab the rope with both hands, palms facing each other",
            "Pull the rope toward your face, separating your hands as you pull",
            "Keep your elbows high and out to the sides",
            "Squeeze your shoulder blades together at the end of the movement",
            "Slowly return to the starting position",
        ],
        mistakes: &[
            "Pulling the rope too low",
            "Not separating the hands enough at the end of the movement",
            "Using momentum to pull the weight",
            "Not maintaining proper posture",
        ],
    },
    Instruction {
        exercise: "Military Press",
        gif: "military_press.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Hold a barbell at shoulder height with an overhand grip",
            "Keep your core tight and back straight",
            "Press the bar overhead until your arms are fully extended",
            "Lower the bar back to shoulder height with control",
            "Keep your elbows slightly in front of the bar",
        ],
        mistakes: &[
            "Arching the back excessively",
            "Not fully extending the arms at the top",
            "Using momentum to lift the weight",
            "Not maintaining proper shoulder position",
        ],
    },
    Instruction {
        exercise: "Lateral Raises",
        gif: "lat_raises.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Hold dumbbells at your sides with palms facing inward",
            "Keep a slight bend in your elbows",
            "Raise your arms out to the sides until they're parallel to the floor",
            "Lower the weights back down with control",
            "Keep your core engaged throughout the movement",
        ],
        mistakes: &[
            "Using momentum to lift the weights",
            "Raising the arms too high",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Front Raises",
        gif: "front_raises.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Hold a dumbbell in each hand in front of your thighs",
            "Keep your arms straight with a slight bend in the elbows",
            "Raise your arms forward until they're parallel to the floor",
            "Lower the weights back down with control",
            "Keep your core engaged throughout the movement",
        ],
        mistakes: &[
            "Using momentum to lift the weights",
            "Raising the arms too high",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Reverse Flyes",
        gif: "reverse_flys.gif",
        steps: &[
            "Stand with your feet shoulder-width apart",
            "Bend at your hips with a slight bend in your knees",
            "Hold dumbbells with palms facing each other",
            "Raise your arms out to the sides, squeezing your shoulder blades together",
            "Lower the weights back down with control",
            "Keep your back straight throughout the movement",
        ],
        mistakes: &[
            "Using momentum to lift the weights",
            "Not maintaining proper back position",
            "Raising the arms too high",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Arnold Press",
        gif: "dumbbell-arnold_press.gif",
        steps: &[
            "Sit on a bench with back support",
            "Hold dumbbells at shoulder height with palms facing you",
            "Press the weights overhead while rotating your palms outward",
            "At the top, your palms should face forward",
            "Lower the weights while rotating your palms back to the starting position",
            "Keep your core engaged throughout the movement",
        ],
        mistakes: &[
            "Not completing the full rotation",
            "Using momentum to lift the weights",
            "Not maintaining proper shoulder position",
            "Arching the back excessively",
        ],
    },
    Instruction {
        exercise: "Bench Press",
        gif: "barbell_benchpress.gif",
        steps: &[
            "Lie on a flat bench with your feet flat on the floor",
            "Grip the bar slightly wider than shoulder-width",
            "Unrack the bar and lower it to your mid-chest",
            "Keep your elbows at about 45 degrees from your body",
            "Press the bar back up until your arms are fully extended",
            "Keep your core tight and maintain a slight arch in your lower back",
        ],
        mistakes: &[
            "Bouncing the bar off the chest",
            "Not maintaining proper shoulder position",
            "Flaring the elbows too much",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Incline Dumbbell Press",
        gif: "dumbbell incline press.gif",
        steps: &[
            "Set the bench to a 30-45 degree angle",
            "Hold dumbbells at shoulder height with palms facing forward",
            "Press the weights up until your arms are fully extended",
            "Lower the weights back to shoulder height with control",
            "Keep your core engaged and maintain proper shoulder position",
            "Don't let your elbows flare out too much",
        ],
        mistakes: &[
            "Not maintaining proper shoulder position",
            "Using momentum to lift the weights",
            "Not controlling the negative portion",
            "Setting the bench angle too high",
        ],
    },
    Instruction {
        exercise: "Dips",
        gif: "dips.gif",
        steps: &[
            "Grip the parallel bars with your hands slightly wider than shoulder-width",
            "Support your body with straight arms",
            "Lower your body by bending your elbows",
            "Keep your elbows close to your body",
            "Lower until your upper arms are parallel to the floor",
            "Press back up to the starting position",
        ],
        mistakes: &[
            "Not going deep enough",
            "Flaring the elbows too much",
            "Not maintaining proper shoulder position",
            "Using momentum to complete the movement",
        ],
    },
    Instruction {
        exercise: "Cable Flyes",
        gif: "cable_flys.gif",
        steps: &[
            "Stand between two cable machines",
            "Grab the handles with your arms extended to the sides",
            "Take a step forward to create tension",
            "Bring your arms forward in an arc motion",
            "Squeeze your chest at the end of the movement",
            "Return to the starting position with control",
        ],
        mistakes: &[
            "Using momentum to complete the movement",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
            "Not taking enough steps forward",
        ],
    },
    Instruction {
        exercise: "Push-Ups",
        gif: "push_ups.gif",
        steps: &[
            "Start in a plank position with hands slightly wider than shoulder-width",
            "Keep your body in a straight line from head to heels",
            "Lower your body by bending your elbows",
            "Keep your elbows at about 45 degrees from your body",
            "Lower until your chest nearly touches the floor",
            "Press back up to the starting position",
        ],
        mistakes: &[
            "Not maintaining a straight body line",
            "Not going deep enough",
            "Flaring the elbows too much",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Pull-Ups",
        gif: "pullups.gif",
        steps: &[
            "Grab the pull-up bar with hands slightly wider than shoulder-width",
            "Hang with arms fully extended",
            "Pull your body up until your chin is over the bar",
            "Keep your core engaged throughout the movement",
            "Lower yourself back down with control",
            "Maintain proper shoulder position",
        ],
        mistakes: &[
            "Not going through full range of motion",
            "Using momentum to complete the movement",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Barbell Rows",
        gif: "barbell rows.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Bend at your hips and knees to grab the bar",
            "Keep your back straight and chest up",
            "Pull the bar to your lower chest/upper abdomen",
            "Squeeze your shoulder blades together at the top",
            "Lower the bar back down with control",
        ],
        mistakes: &[
            "Rounding the back during the movement",
            "Using momentum to lift the weight",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Lat Pulldowns",
        gif: "lat pulldowns.gif",
        steps: &[
            "Sit at the lat pulldown machine",
            "Grab the bar with a wide overhand grip",
            "Pull the bar down to your upper chest",
            "Keep your chest up and core engaged",
            "Squeeze your shoulder blades together at the bottom",
            "Return to the starting position with control",
        ],
        mistakes: &[
            "Pulling the bar behind the neck",
            "Using momentum to complete the movement",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Deadlifts",
        gif: "deadlift.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Bend at your hips and knees to grab the bar",
            "Keep your back straight and chest up",
            "Lift the bar by extending your hips and knees",
            "Stand up straight with shoulders back",
            "Lower the bar back down with control",
        ],
        mistakes: &[
            "Rounding the back during the lift",
            "Using too much weight and compromising form",
            "Not maintaining proper hip position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "T-Bar Rows",
        gif: "tbar rows.gif",
        steps: &[
            "Stand over the T-bar with feet shoulder-width apart",
            "Bend at your hips and knees to grab the handles",
            "Keep your back straight and chest up",
            "Pull the weight to your chest",
            "Squeeze your shoulder blades together at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Rounding the back during the movement",
            "Using momentum to lift the weight",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Tricep Pushdowns",
        gif: "tricep_pushdowns.gif",
        steps: &[
            "Stand facing a high pulley machine",
            "Grab the bar with an overhand grip, hands shoulder-width apart",
            "Keep your elbows close to your body",
            "Push the bar down until your arms are fully extended",
            "Squeeze your triceps at the bottom",
            "Return to the starting position with control",
        ],
        mistakes: &[
            "Moving the elbows away from the body",
            "Using momentum to complete the movement",
            "Not fully extending the arms",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Skull Crushers",
        gif: "skullcrushers.gif",
        steps: &[
            "Lie on a flat bench",
            "Hold a barbell or EZ bar above your chest",
            "Lower the weight toward your forehead by bending your elbows",
            "Keep your upper arms perpendicular to the floor",
            "Extend your arms back to the starting position",
            "Keep your elbows in a fixed position",
        ],
        mistakes: &[
            "Moving the elbows too much",
            "Not maintaining proper shoulder position",
            "Using too much weight",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Close-Grip Bench Press",
        gif: "closs grip bench press.gif",
        steps: &[
            "Lie on a flat bench",
            "Grip the bar with hands closer than shoulder-width",
            "Unrack the bar and lower it to your mid-chest",
            "Keep your elbows close to your body",
            "Press the bar back up until your arms are fully extended",
            "Keep your core tight throughout the movement",
        ],
        mistakes: &[
            "Flaring the elbows too much",
            "Not maintaining proper shoulder position",
            "Using too much weight",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Overhead Tricep Extensions",
        gif: "overhead_tricep extensions.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold a dumbbell with both hands behind your head",
            "Keep your upper arms close to your ears",
            "Extend your arms upward",
            "Lower the weight back down behind your head",
            "Keep your elbows pointing forward",
        ],
        mistakes: &[
            "Moving the elbows too much",
            "Not maintaining proper shoulder position",
            "Using momentum to complete the movement",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Diamond Push-Ups",
        gif: "diamond_push ups.gif",
        steps: &[
            "Start in a push-up position",
            "Place your hands close together, forming a diamond shape",
            "Keep your body in a straight line",
            "Lower your body by bending your elbows",
            "Keep your elbows close to your body",
            "Press back up to the starting position",
        ],
        mistakes: &[
            "Not maintaining a straight body line",
            "Not going deep enough",
            "Moving the elbows too much",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Barbell Curls",
        gif: "barbell curls.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold a barbell with an underhand grip",
            "Keep your elbows close to your body",
            "Curl the bar up toward your shoulders",
            "Squeeze your biceps at the top",
            "Lower the bar back down with control",
        ],
        mistakes: &[
            "Swinging the body to lift the weight",
            "Moving the elbows away from the body",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Hammer Curls",
        gif: "hammer curls.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold dumbbells with palms facing inward",
            "Keep your elbows close to your body",
            "Curl the weights up toward your shoulders",
            "Squeeze your biceps at the top",
            "Lower the weights back down with control",
        ],
        mistakes: &[
            "Swinging the body to lift the weights",
            "Moving the elbows away from the body",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Preacher Curls",
        gif: "preacher curls.gif",
        steps: &[
            "Sit at a preacher curl bench",
            "Rest your arms on the pad",
            "Hold a barbell or dumbbells with an underhand grip",
            "Curl the weight up toward your shoulders",
            "Squeeze your biceps at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Not maintaining proper arm position on the pad",
            "Using momentum to lift the weight",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Incline Dumbbell Curls",
        gif: "incline dumbbell curls.gif",
        steps: &[
            "Set the bench to a 45-degree angle",
            "Sit back with dumbbells at your sides",
            "Keep your elbows close to your body",
            "Curl the weights up toward your shoulders",
            "Squeeze your biceps at the top",
            "Lower the weights back down with control",
        ],
        mistakes: &[
            "Swinging the body to lift the weights",
            "Moving the elbows away from the body",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Concentration Curls",
        gif: "Concentration-Curl.gif",
        steps: &[
            "Sit on a bench with legs spread",
            "Rest your elbow on your inner thigh",
            "Hold a dumbbell with an underhand grip",
            "Curl the weight up toward your shoulder",
            "Squeeze your bicep at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Moving the elbow off the thigh",
            "Swinging the body to lift the weight",
            "Not maintaining proper shoulder position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Wrist Curls",
        gif: "wrist curls.gif",
        steps: &[
            "Sit on a bench with forearms resting on thighs",
            "Hold a barbell or dumbbells with an underhand grip",
            "Let your wrists hang over your knees",
            "Curl your wrists up toward your body",
            "Squeeze your forearms at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Moving the forearms during the movement",
            "Using too much weight",
            "Not maintaining proper wrist position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Reverse Wrist Curls",
        gif: "Reverse-Wrist-Curl.gif",
        steps: &[
            "Sit on a bench with forearms resting on thighs",
            "Hold a barbell or dumbbells with an overhand grip",
            "Let your wrists hang over your knees",
            "Curl your wrists up toward your body",
            "Squeeze your forearms at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Moving the forearms during the movement",
            "Using too much weight",
            "Not maintaining proper wrist position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Farmers Walks",
        gif: "farmer walkers.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold heavy dumbbells at your sides",
            "Keep your shoulders back and chest up",
            "Walk forward with short, controlled steps",
            "Maintain proper posture throughout",
            "Keep your core engaged",
        ],
        mistakes: &[
            "Rounding the shoulders",
            "Not maintaining proper posture",
            "Taking steps that are too long",
            "Not engaging the core",
        ],
    },
    Instruction {
        exercise: "Plate Pinches",
        gif: "plate pinches.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold two weight plates together",
            "Pinch the plates between your thumb and fingers",
            "Hold for the desired duration",
            "Keep your wrist straight",
            "Maintain proper posture",
        ],
        mistakes: &[
            "Not maintaining proper grip",
            "Using plates that are too heavy",
            "Not maintaining proper wrist position",
            "Not maintaining proper posture",
        ],
    },
    Instruction {
        exercise: "Behind-the-Back Wrist Curls",
        gif: "behind the back wrist curls.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold a barbell behind your back",
            "Keep your arms straight",
            "Curl your wrists up toward your body",
            "Squeeze your forearms at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Moving the arms during the movement",
            "Using too much weight",
            "Not maintaining proper wrist position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Squats",
        gif: "squat.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Keep your chest up and core engaged",
            "Bend at your hips and knees",
            "Lower until thighs are parallel to the floor",
            "Keep your knees in line with your toes",
            "Drive through your heels to stand back up",
        ],
        mistakes: &[
            "Knees caving inward",
            "Rising hips too fast",
            "Not maintaining proper back position",
            "Not going deep enough",
        ],
    },
    Instruction {
        exercise: "Romanian Deadlifts",
        gif: "Romanian-deadlift.gif",
        steps: &[
            "Stand with feet shoulder-width apart",
            "Hold a barbell with an overhand grip",
            "Keep your back straight and chest up",
            "Hinge at your hips, pushing them back",
            "Lower the bar along your legs",
            "Return to standing by driving your hips forward",
        ],
        mistakes: &[
            "Rounding the back",
            "Bending the knees too much",
            "Not maintaining proper hip position",
            "Using too much weight",
        ],
    },
    Instruction {
        exercise: "Leg Press",
        gif: "leg-press.gif",
        steps: &[
            "Sit on the leg press machine",
            "Place your feet shoulder-width apart on the platform",
            "Keep your back flat against the pad",
            "Release the safety handles",
            "Lower the platform by bending your knees",
            "Press the platform back up to starting position",
        ],
        mistakes: &[
            "Locking the knees at the top",
            "Not maintaining proper back position",
            "Using too much weight",
            "Not going through full range of motion",
        ],
    },
    Instruction {
        exercise: "Lunges",
        gif: "lunges.gif",
        steps: &[
            "Stand with feet together",
            "Take a step forward with one leg",
            "Lower your body until both knees are at 90 degrees",
            "Keep your front knee above your ankle",
            "Push through your front heel to return to standing",
            "Alternate legs for each rep",
        ],
        mistakes: &[
            "Stepping too far forward",
            "Not maintaining proper knee alignment",
            "Leaning too far forward",
            "Not going deep enough",
        ],
    },
    Instruction {
        exercise: "Leg Extensions",
        gif: "leg extensions.gif",
        steps: &[
            "Sit on the leg extension machine",
            "Adjust the pad to rest on your lower shins",
            "Keep your back straight against the pad",
            "Extend your legs until they're straight",
            "Squeeze your quadriceps at the top",
            "Lower the weight back down with control",
        ],
        mistakes: &[
            "Using momentum to complete the movement",
            "Not maintaining proper back position",
            "Using too much weight",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Standing Calf Raises",
        gif: "standing calf raises.gif",
        steps: &[
            "Stand on a raised platform or step",
            "Place the balls of your feet on the edge",
            "Hold onto something for balance",
            "Lower your heels below the platform",
            "Raise up onto your toes as high as possible",
            "Lower back down with control",
        ],
        mistakes: &[
            "Not going through full range of motion",
            "Using momentum to complete the movement",
            "Not maintaining proper balance",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Seated Calf Raises",
        gif: "seated calf raises.gif",
        steps: &[
            "Sit on the calf raise machine",
            "Place the balls of your feet on the platform",
            "Adjust the pad to rest on your thighs",
            "Lower your heels as far as possible",
            "Raise up onto your toes as high as possible",
            "Lower back down with control",
        ],
        mistakes: &[
            "Not going through full range of motion",
            "Using momentum to complete the movement",
            "Not maintaining proper back position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Donkey Calf Raises",
        gif: "donkey calf raises.gif",
        steps: &[
            "Stand on a raised platform",
            "Bend at your hips, placing hands on a support",
            "Have a partner sit on your lower back",
            "Lower your heels below the platform",
            "Raise up onto your toes as high as possible",
            "Lower back down with control",
        ],
        mistakes: &[
            "Not going through full range of motion",
            "Using momentum to complete the movement",
            "Not maintaining proper back position",
            "Not controlling the negative portion",
        ],
    },
    Instruction {
        exercise: "Jump Rope",
        gif: "jump rope.gif",
        steps: &[
            "Hold the rope handles at your sides",
            "Keep your elbows close to your body",
            "Jump on the balls of your feet",
            "Keep your jumps small and controlled",
            "Maintain a steady rhythm",
            "Land softly on each jump",
        ],
        mistakes: &[
            "Jumping too high",
            "Not maintaining proper rhythm",
            "Landing too hard",
            "Not keeping the rope at the right length",
        ],
    },
    Instruction {
        exercise: "Single-Leg Calf Raises",
        gif: "single leg calf raises.gif",
        steps: &[
            "Stand on one foot on a raised platform",
            "Hold onto something for balance",
            "Lower your heel below the platform",
            "Raise up onto your toe as high as possible",
            "Lower back down with control",
            "Complete all reps on one leg before switching",
        ],
        mistakes: &[
            "Not going through full range of motion",
            "Using momentum to complete the movement",
            "Not maintaining proper balance",
            "Not controlling the negative portion",
        ],
    },
];

pub fn find_instruction(exercise: &str) -> Option<&'static Instruction> {
    INSTRUCTIONS.iter().find(|i| i.exercise == exercise)
}

/// Relative path of the demonstration GIF, if the exercise has one
pub fn gif_path(exercise: &str) -> Option<String> {
    find_instruction(exercise).map(|i| format!("{}/{}", GIF_DIR, i.gif))
}

/// Numbered lines of a list, or the fallback line when the list is empty
fn numbered(items: &[&str], fallback: &str) -> Vec<String> {
    let items = if items.is_empty() { &[fallback][..] } else { items };
    items
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{}. {}", i + 1, text))
        .collect()
}

pub fn steps_lines(exercise: &str) -> Vec<String> {
    let steps = find_instruction(exercise).map(|i| i.steps).unwrap_or(&[]);
    numbered(steps, STEPS_FALLBACK)
}

pub fn mistakes_lines(exercise: &str) -> Vec<String> {
    let mistakes = find_instruction(exercise).map(|i| i.mistakes).unwrap_or(&[]);
    numbered(mistakes, MISTAKES_FALLBACK)
}

/// Exercise name with its muscle group, when it is a default exercise
pub fn instruction_heading(exercise: &str) -> String {
    match find_category_of(exercise) {
        Some(category) => format!("{} ({})", exercise, category.name()),
        None => exercise.to_string(),
    }
}

/// Full text page for an exercise, printed by the CLI
pub fn format_instruction(exercise: &str) -> String {
    let mut text = format!("{}\n\n", instruction_heading(exercise));
    if let Some(path) = gif_path(exercise) {
        text.push_str(&format!("Demo: {}\n\n", path));
    }
    text.push_str("Instructions\n");
    for line in steps_lines(exercise) {
        text.push_str(&line);
        text.push('\n');
    }
    text.push_str("\nCommon Mistakes\n");
    for line in mistakes_lines(exercise) {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
